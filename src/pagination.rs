//! Pagination Controller
//!
//! Derives page numbers from the cursors of the latest `BookPage` and lays
//! out the numbered button window.

use crate::api::page_from_cursor;
use crate::config::{BOOKS_PER_PAGE, MAX_PAGE_BUTTONS};
use crate::models::BookPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    NoResults,
    SinglePage,
    MultiPage,
}

/// One slot in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page { number: u32, current: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    page_size: u32,
    max_buttons: u32,
    total_count: u64,
    total_pages: u32,
    current_page: u32,
    next: Option<String>,
    previous: Option<String>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(BOOKS_PER_PAGE, MAX_PAGE_BUTTONS)
    }
}

impl Pagination {
    pub fn new(page_size: u32, max_buttons: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            max_buttons: max_buttons.max(1),
            total_count: 0,
            total_pages: 0,
            current_page: 1,
            next: None,
            previous: None,
        }
    }

    /// Replace all state with what the envelope implies
    pub fn update(&mut self, page: &BookPage) {
        self.total_count = page.count;
        self.total_pages = page.count.div_ceil(u64::from(self.page_size)) as u32;
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.current_page = infer_current_page(page.next.as_deref(), page.previous.as_deref());
    }

    /// Forget the last envelope (hides the controls)
    pub fn clear(&mut self) {
        *self = Self::new(self.page_size, self.max_buttons);
    }

    pub fn mode(&self) -> PaginationMode {
        if self.total_count == 0 {
            PaginationMode::NoResults
        } else if self.total_count <= u64::from(self.page_size) {
            PaginationMode::SinglePage
        } else {
            PaginationMode::MultiPage
        }
    }

    pub fn is_visible(&self) -> bool {
        self.mode() == PaginationMode::MultiPage
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_cursor(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Move to `page`. Returns the page to fetch, or `None` when already there.
    pub fn request_page(&mut self, page: u32) -> Option<u32> {
        if page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    /// Numbered buttons centred on the current page, with first/last
    /// buttons and ellipses when the window does not reach the ends.
    pub fn controls(&self) -> Vec<PageControl> {
        if !self.is_visible() {
            return Vec::new();
        }

        let total = i64::from(self.total_pages);
        let current = i64::from(self.current_page);
        let max = i64::from(self.max_buttons);

        let mut start = (current - max / 2).max(1);
        let end = (start + max - 1).min(total);
        if end - start + 1 < max && start > 1 {
            start = (end - max + 1).max(1);
        }

        let button = |n: i64| PageControl::Page { number: n as u32, current: n == current };
        let mut controls = Vec::new();

        if start > 1 {
            controls.push(button(1));
            if start > 2 {
                controls.push(PageControl::Ellipsis);
            }
        }
        controls.extend((start..=end).map(button));
        if end < total {
            if end < total - 1 {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(button(total));
        }

        controls
    }
}

/// Current page from the cursors: next - 1, else previous + 1, else 1.
/// A cursor without a `page` parameter points at page 1.
pub fn infer_current_page(next: Option<&str>, previous: Option<&str>) -> u32 {
    match (next, previous) {
        (Some(next), _) => page_from_cursor(next).unwrap_or(1).saturating_sub(1).max(1),
        (None, Some(previous)) => page_from_cursor(previous).unwrap_or(1).saturating_add(1),
        (None, None) => 1,
    }
}
