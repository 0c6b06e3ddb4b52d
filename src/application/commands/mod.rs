pub mod memos;
pub mod users;
