//! Polymorphic page-source abstraction over paged query results.

use crate::page::total_pages;

/// Read-only view of a paged result's position.
///
/// Implement this for whatever paged-query type the application uses; the
/// pagination control only needs the current page and the page count.
pub trait PageSource {
    /// Current page, 1-based.
    fn current_page(&self) -> usize;

    /// Total number of pages.
    fn total_pages(&self) -> usize;
}

/// Plain page-state value for callers without a richer paged type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

impl PageState {
    /// Create a page state from an explicit position and count.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Derive page state from raw item counts.
    ///
    /// The requested page is kept as-is: an out-of-range request produces
    /// state the control treats as degenerate and renders nothing for.
    /// Callers that prefer an always-visible control can run the request
    /// through [`clamp_page`](crate::page::clamp_page) first.
    pub fn from_counts(item_count: usize, per_page: usize, requested_page: usize) -> Self {
        Self {
            current_page: requested_page,
            total_pages: total_pages(item_count, per_page),
        }
    }
}

impl PageSource for PageState {
    fn current_page(&self) -> usize {
        self.current_page
    }

    fn total_pages(&self) -> usize {
        self.total_pages
    }
}
