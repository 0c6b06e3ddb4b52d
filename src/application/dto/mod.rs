pub mod auth;
pub mod memos;
pub mod pagination;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use memos::{ChoiceInput, MemoDto, MemoLocator};
pub use pagination::{BoardPageDto, NumberedPage};
pub use users::{UserDto, UserProfileDto};
