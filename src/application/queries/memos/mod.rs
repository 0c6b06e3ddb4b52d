// src/application/queries/memos/mod.rs
mod board;
mod get_by_id;
mod get_by_slug;
mod list;
mod lookup;
mod service;

pub use board::MemoBoardQuery;
pub use get_by_id::GetMemoByIdQuery;
pub use get_by_slug::GetMemoBySlugQuery;
pub use list::ListMemosQuery;
pub(crate) use lookup::find_owned_memo;
pub use service::MemoQueryService;
