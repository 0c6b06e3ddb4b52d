// src/domain/pagination.rs
//! Page-number pagination with "orphan" merging: when the last page would
//! hold no more than `orphans` items they are appended to the page before it.
use crate::domain::errors::{DomainError, DomainResult};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page number '{0}' is not an integer")]
    NotAnInteger(String),
    #[error("page {0} contains no results")]
    Empty(u64),
}

/// Slice of an ordered listing handed to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub window: PageWindow,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u64,
    orphans: u64,
}

impl Paginator {
    pub fn new(per_page: u64, orphans: u64) -> DomainResult<Self> {
        if per_page == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self { per_page, orphans })
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// An empty listing still has one (empty) page.
    pub fn num_pages(&self, count: u64) -> u64 {
        if count == 0 {
            return 1;
        }
        let hits = count.saturating_sub(self.orphans).max(1);
        hits.div_ceil(self.per_page)
    }

    /// Parse a raw `page` query value. Absent means page 1; `last` is accepted
    /// and resolved once the item count is known.
    pub fn parse_number(raw: Option<&str>) -> Result<PageNumber, PageError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(PageNumber::Exact(1)),
            Some("last") => Ok(PageNumber::Last),
            Some(value) => value
                .parse::<u64>()
                .map(PageNumber::Exact)
                .map_err(|_| PageError::NotAnInteger(value.to_string())),
        }
    }

    pub fn page(&self, number: PageNumber, count: u64) -> Result<Page, PageError> {
        let num_pages = self.num_pages(count);
        let number = match number {
            PageNumber::Last => num_pages,
            PageNumber::Exact(n) => n,
        };
        if number == 0 || number > num_pages {
            return Err(PageError::Empty(number));
        }

        let bottom = (number - 1) * self.per_page;
        let mut top = bottom + self.per_page;
        if top + self.orphans >= count {
            top = count;
        }

        Ok(Page {
            number,
            num_pages,
            count,
            window: PageWindow {
                offset: bottom,
                limit: top.saturating_sub(bottom),
            },
        })
    }

    /// Like [`Paginator::page`] but any unusable page number yields page 1.
    pub fn page_or_first(&self, raw: Option<&str>, count: u64) -> Page {
        Self::parse_number(raw)
            .and_then(|number| self.page(number, count))
            .or_else(|_| self.page(PageNumber::Exact(1), count))
            .unwrap_or(Page {
                number: 1,
                num_pages: 1,
                count,
                window: PageWindow {
                    offset: 0,
                    limit: count.min(self.per_page),
                },
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Exact(u64),
    Last,
}
