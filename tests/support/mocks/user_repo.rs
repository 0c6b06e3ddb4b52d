// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use memo_core::domain::errors::{DomainError, DomainResult};
use memo_core::domain::user::{
    NewUser, Nickname, PasswordHash, User, UserId, UserRepository, Username,
};
use std::sync::Mutex;

/// メモリ上のユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding `tester7` (nickname "Seven") and `tester8`, whose
    /// ids match the tokens from [`token_for`](super::security::token_for).
    pub fn with_testers() -> Self {
        let repo = Self::new();
        repo.seed(7, "tester7", "Seven");
        repo.seed(8, "tester8", "");
        repo
    }

    pub fn seed(&self, id: i64, username: &str, nickname: &str) {
        self.users.lock().unwrap().push(User {
            id: UserId::new(id).unwrap(),
            username: Username::new(username).unwrap(),
            nickname: Nickname::new(nickname).unwrap(),
            password_hash: PasswordHash::new("hashed:password").unwrap(),
            created_at: super::time::fixed_now(),
        });
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let next_id = users.iter().map(|user| i64::from(user.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(next_id)?,
            username: new_user.username,
            nickname: new_user.nickname,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }
}
