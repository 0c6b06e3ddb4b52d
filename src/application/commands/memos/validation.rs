// src/application/commands/memos/validation.rs
use crate::{
    application::{
        dto::ChoiceInput,
        error::{ApplicationError, ApplicationResult},
    },
    domain::memo::{Category, MemoContent, MemoTitle, Priority},
};

const REQUIRED: &str = "this field is required";

pub(super) fn required<T>(field: &'static str, value: Option<T>) -> ApplicationResult<T> {
    value.ok_or_else(|| ApplicationError::invalid_field(field, REQUIRED))
}

pub(super) fn title(value: String, forbidden_words: &[String]) -> ApplicationResult<MemoTitle> {
    let title = MemoTitle::new(value)?;
    let hit = forbidden_words
        .iter()
        .filter(|word| !word.is_empty())
        .any(|word| title.as_str().contains(word.as_str()));
    if hit {
        return Err(ApplicationError::invalid_field(
            "title",
            "title contains a forbidden word",
        ));
    }
    Ok(title)
}

pub(super) fn content(value: String) -> ApplicationResult<MemoContent> {
    Ok(MemoContent::new(value)?)
}

pub(super) fn category(value: Option<ChoiceInput>) -> ApplicationResult<Option<Category>> {
    Ok(value.map(ChoiceInput::into_category).transpose()?)
}

pub(super) fn priority(value: Option<ChoiceInput>) -> ApplicationResult<Option<Priority>> {
    Ok(value.map(ChoiceInput::into_priority).transpose()?)
}
