// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memo_repo;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{DummyPasswordHasher, DummyTokenManager, token_for};

// ユーティリティ関連
pub use util::{FailingTransliterator, SteppingClock};

// リポジトリ
pub use memo_repo::InMemoryMemoRepo;
pub use user_repo::InMemoryUserRepo;
