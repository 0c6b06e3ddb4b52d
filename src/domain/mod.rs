pub mod errors;
pub mod memo;
pub mod pagination;
pub mod user;
