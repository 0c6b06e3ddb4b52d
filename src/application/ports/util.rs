// src/application/ports/util.rs
use thiserror::Error;

pub trait SlugGenerator: Send + Sync {
    /// Reduce `input` to lowercase ASCII letters, digits and single hyphens.
    /// May return an empty string.
    fn slugify(&self, input: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    #[error("no romanization for '{0}'")]
    Unconvertible(char),
    #[error("transliteration failed: {0}")]
    Failed(String),
}

/// Converts script-specific text into a Latin phonetic approximation.
pub trait Transliterator: Send + Sync {
    fn romanize(&self, input: &str) -> Result<String, TransliterationError>;
}
