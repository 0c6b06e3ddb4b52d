// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod board;
pub mod memos;
