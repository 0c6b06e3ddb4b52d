use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};

/// Page-number listing: total count, neighbour page numbers and the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct NumberedPage<T> {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> NumberedPage<T> {
    pub fn new(page: &Page, results: Vec<T>) -> Self {
        Self {
            count: page.count,
            next: page.next_number(),
            previous: page.previous_number(),
            results,
        }
    }
}

/// One page of the memo board together with the page metadata a list view
/// needs to render its navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct BoardPageDto<T> {
    pub owner: String,
    pub nickname: String,
    pub category: Option<String>,
    pub page_number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub has_other_pages: bool,
    pub items: Vec<T>,
}
