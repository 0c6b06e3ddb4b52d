mod login;
mod logout;
mod password;
mod service;
mod signup;

pub use login::{LoginResult, LoginUserCommand};
pub use logout::LogoutCommand;
pub use service::UserCommandService;
pub use signup::SignupCommand;
