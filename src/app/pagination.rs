//! Fixed-size paging over the filtered collection.
//!
//! One page size drives both the page count and the slice bounds. Pages are
//! 1-indexed. Navigation past either end is a no-op: it never wraps and never
//! fails.

use std::ops::Range;

/// Default number of heroes per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Paging cursor over a collection of `total_items` items.
///
/// Invariant: `current_page` is always within `[1, max(1, page_count())]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// Creates a cursor on page 1 of an empty collection.
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, `ceil(total_items / page_size)`. Zero for an empty collection.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Advances one page. Returns `false` (and changes nothing) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Steps back one page. Returns `false` (and changes nothing) on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Returns to page 1 without touching the item count.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Updates the item count and clamps the current page into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last = self.page_count().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Index range of the current page within the collection.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Slices `items` to the current page.
    ///
    /// `items` is expected to hold `total_items` entries; a shorter slice is
    /// clipped rather than indexed out of bounds.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Slices `collection` into page `page` of `page_size` items.
///
/// `page` is clamped the same way [`Pagination::set_total_items`] clamps it.
///
/// # Example
///
/// ```rust
/// use herodex::app::pagination::paginate;
///
/// let items: Vec<u32> = (1..=13).collect();
/// let last = paginate(&items, 6, 3);
/// assert_eq!(last.items, &[13]);
/// assert!(last.has_prev);
/// assert!(!last.has_next);
/// ```
#[must_use]
pub fn paginate<T>(collection: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let mut cursor = Pagination::new(page_size);
    cursor.current_page = page.max(1);
    cursor.set_total_items(collection.len());

    Page {
        items: cursor.slice(collection),
        number: cursor.current_page,
        has_prev: cursor.has_prev(),
        has_next: cursor.has_next(),
    }
}
