// src/domain/memo/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Memo, MemoUpdate, NewMemo};
pub use repository::{MemoFilter, MemoReadRepository, MemoWriteRepository};
pub use value_objects::{Category, MemoContent, MemoId, MemoSlug, MemoTitle, Priority};
