//! This module defines the common functionality for paging lists.
//!
//! Listing operations sort with a deterministic key (ties broken by id) and
//! then take `page_size` records at offset `(page - 1) * page_size`. A page
//! past the end is empty rather than an error.

use serde::Deserialize;

use crate::{EngineError, ResultEngine};

/// The config for pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagingPolicy {
    /// The page size used when a request does not specify one.
    pub default_page_size: u64,
    /// The largest page size a request may ask for.
    pub max_page_size: u64,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl PagingPolicy {
    /// Build a validated [`PageRequest`], filling in defaults.
    pub fn request(&self, page: Option<u64>, page_size: Option<u64>) -> ResultEngine<PageRequest> {
        let page_size = page_size.unwrap_or(self.default_page_size);
        if page_size > self.max_page_size {
            return Err(EngineError::InvalidInput(format!(
                "pageSize must be at most {}",
                self.max_page_size
            )));
        }
        PageRequest::new(page.unwrap_or(1), page_size)
    }
}

const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> ResultEngine<Self> {
        if page == 0 {
            return Err(EngineError::InvalidInput("page must be >= 1".to_string()));
        }
        if page_size == 0 {
            return Err(EngineError::InvalidInput(
                "pageSize must be >= 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(self) -> u64 {
        self.page
    }

    pub fn page_size(self) -> u64 {
        self.page_size
    }

    /// Zero-based index of the first record on this page.
    ///
    /// Capped at `i64::MAX`, the largest offset the database binds. No table
    /// holds that many rows, so a capped page is simply past the end.
    pub fn offset(self) -> u64 {
        (self.page - 1)
            .checked_mul(self.page_size)
            .map_or(MAX_OFFSET, |offset| offset.min(MAX_OFFSET))
    }
}

/// One page of an ordered result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total_records: u64) -> Self {
        Self {
            data,
            current_page: request.page(),
            page_size: request.page_size(),
            total_records,
            total_pages: total_pages(total_records, request.page_size()),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total_records / page_size)`, never less than 1.
pub fn total_pages(total_records: u64, page_size: u64) -> u64 {
    total_records.div_ceil(page_size.max(1)).max(1)
}
