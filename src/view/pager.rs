use crate::model::{DEFAULT_PAGE_SIZE, Page};

/// Client-side pagination over an already derived list.
///
/// Pages are 0-based. The current page is clamped whenever a window is taken,
/// so shrinking the underlying list (a delete, a narrower filter) never leaves
/// the pager pointing past the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    pub fn total_pages(&self, len: usize) -> u32 {
        let size = self.page_size as usize;
        len.div_ceil(size) as u32
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.page + 1, len)
    }

    pub fn prev(&mut self, len: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(p) => self.go_to(p, len),
            None => false,
        }
    }

    /// Moves to `page` if it exists for a list of `len` items.
    pub fn go_to(&mut self, page: u32, len: usize) -> bool {
        if page < self.total_pages(len) {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn clamp(&mut self, len: usize) {
        let last = self.total_pages(len).saturating_sub(1);
        self.page = self.page.min(last);
    }

    pub fn window<T: Clone>(&mut self, items: &[T]) -> Page<T> {
        self.clamp(items.len());
        let total_pages = self.total_pages(items.len());
        if total_pages == 0 {
            return Page::empty(self.page_size);
        }

        let size = self.page_size as usize;
        let start = self.page as usize * size;
        let end = (start + size).min(items.len());
        Page {
            content: items[start..end].to_vec(),
            page: self.page,
            size: self.page_size,
            total_elements: items.len() as u64,
            total_pages,
            first: self.page == 0,
            last: self.page + 1 >= total_pages,
        }
    }
}

#[cfg(test)]
#[path = "../tests/view/pager_tests.rs"]
mod tests;
