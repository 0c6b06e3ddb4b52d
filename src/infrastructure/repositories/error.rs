use crate::domain::errors::DomainError;

const CNT_MEMO_OWNER_SLUG: &str = "memos_owner_slug_key";
const CNT_MEMO_OWNER: &str = "memos_owner_id_fkey";
const CNT_MEMO_PRIORITY_CHECK: &str = "memos_priority_check";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_MEMO_OWNER_SLUG => {
                        DomainError::Conflict("slug already exists for this owner".into())
                    }
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_MEMO_OWNER => DomainError::NotFound("owner not found".into()),
                    CNT_MEMO_PRIORITY_CHECK => {
                        DomainError::invalid_field("priority", "priority is out of range")
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
