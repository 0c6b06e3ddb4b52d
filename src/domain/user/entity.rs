// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Nickname, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub nickname: Nickname,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to show in listings: the nickname when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            self.username.as_str()
        } else {
            self.nickname.as_str()
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub nickname: Nickname,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
