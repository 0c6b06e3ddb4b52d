use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 6;

pub(super) fn validate_password(password: &str, confirmation: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::invalid_field(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if password != confirmation {
        return Err(ApplicationError::invalid_field(
            "password_confirmation",
            "the two password fields didn't match",
        ));
    }

    Ok(())
}
