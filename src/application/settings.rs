// src/application/settings.rs

/// Tunables for memo validation and listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoSettings {
    /// Substrings a memo title may not contain.
    pub forbidden_words: Vec<String>,
    pub api_page_size: u64,
    pub board_page_size: u64,
    pub board_page_orphans: u64,
}

impl Default for MemoSettings {
    fn default() -> Self {
        Self {
            forbidden_words: vec!["禁止ワード".to_string()],
            api_page_size: 5,
            board_page_size: 9,
            board_page_orphans: 2,
        }
    }
}
