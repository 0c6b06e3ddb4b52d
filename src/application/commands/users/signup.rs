use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, Nickname, PasswordHash, Username},
};

pub struct SignupCommand {
    pub username: String,
    pub nickname: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}

impl UserCommandService {
    pub async fn signup(&self, command: SignupCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let nickname = Nickname::new(command.nickname.unwrap_or_default())?;
        validate_password(&command.password, &command.password_confirmation)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            username,
            nickname,
            password_hash: PasswordHash::new(hashed)?,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user signed up");

        Ok(user.into())
    }
}
