use serde::{Deserialize, Serialize};

use crate::view::{SortDirection, SortKey};

/// One window over an ordered collection, as returned by the backend's paged
/// endpoints and by the client-side pager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
        }
    }
}

/// Server-side paging parameters for `GET /cards`.
///
/// `sort_by: None` keeps the backend default ordering by acquisition date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: Option<SortKey>,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: super::DEFAULT_PAGE_SIZE,
            sort_by: None,
            direction: SortDirection::Desc,
        }
    }
}

impl PageRequest {
    pub fn sort_param(&self) -> &'static str {
        self.sort_by.map(SortKey::wire_name).unwrap_or("addedAt")
    }
}
