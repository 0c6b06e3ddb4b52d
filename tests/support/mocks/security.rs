// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use memo_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use memo_core::domain::user::UserId;

/// Bearer token understood by [`DummyTokenManager`] for the given user.
pub fn token_for(user_id: i64) -> String {
    format!("token-user-{user_id}")
}

/* -------------------------------- TokenManager -------------------------------- */

/// Tokens look like `token-user-{id}` or `token-user-{id}.{session}`.
/// The username is always `tester{id}`.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let mut token = token_for(i64::from(subject.user_id));
        if let Some(sid) = &subject.session_id {
            token.push('.');
            token.push_str(sid);
        }
        Ok(AuthTokenDto {
            token,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let rest = token
            .strip_prefix("token-user-")
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let (id, session_id) = match rest.split_once('.') {
            Some((id, sid)) => (id, Some(sid.to_string())),
            None => (rest, None),
        };
        let id: i64 = id
            .parse()
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
        let user_id = UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid token"))?;

        Ok(AuthenticatedUser {
            id: user_id,
            username: format!("tester{id}"),
            session_id,
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 平文に接頭辞を付けるだけのハッシャー
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
