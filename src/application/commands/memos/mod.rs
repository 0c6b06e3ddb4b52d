// src/application/commands/memos/mod.rs
mod create;
mod delete;
mod owner_lock;
mod service;
mod update;
mod validation;

pub use create::{CreateMemoCommand, CreateMemoCommandBuilder};
pub use delete::DeleteMemoCommand;
pub use service::MemoCommandService;
pub use update::UpdateMemoCommand;
