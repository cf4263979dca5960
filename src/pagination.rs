use std::num::NonZeroUsize;

use crate::names::PAGE_SIZE;

/// One-based page number taken from the `page` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(NonZeroUsize);

impl Page {
    pub const FIRST: Page = Page(NonZeroUsize::MIN);

    /// Anything that is not a positive integer falls back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<NonZeroUsize>().ok())
            .map(Page)
            .unwrap_or(Self::FIRST)
    }

    pub fn number(self) -> usize {
        self.0.get()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// The `page`-th window of `PAGE_SIZE` items. Empty when the page starts past the end.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = (page.number() - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}
