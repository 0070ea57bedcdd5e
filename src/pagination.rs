//! Page math for in-memory collections.
//!
//! Pages are 1-based. Rows are cut out of the collection by position, so the
//! ids of the records play no part in deciding which page they land on.

use std::ops::Range;

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const DEFAULT_PAGES_IN_WINDOW: usize = 10;
/// Step used by the "skip ten pages" controls.
pub const FAR_JUMP_STEP: usize = 10;

/// Number of the last page, `0` for an empty collection.
pub fn last_page(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Positions of the rows that belong to `page`.
///
/// Pages past the end of the collection produce an empty range.
pub fn page_range(total_items: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

fn get_pages(last_page: usize, current_page: usize, window: usize) -> Vec<usize> {
    if last_page == 0 || window == 0 {
        return vec![];
    }

    if current_page + window <= last_page {
        return (current_page..current_page + window).collect();
    }

    // Tail of the range; never start before page 1 when there are fewer
    // pages than the window holds.
    let start = (last_page + 1).saturating_sub(window).max(1);
    (start..=last_page).collect()
}

/// The current page together with the bounds it may move within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    page: usize,
    last_page: usize,
}

impl PageCursor {
    /// Starts on the first page.
    pub fn new(last_page: usize) -> Self {
        Self { page: 1, last_page }
    }

    /// Starts on `page`, clamped into the valid range.
    pub fn at(page: usize, last_page: usize) -> Self {
        let mut cursor = Self::new(last_page);
        cursor.jump(page);
        cursor
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    // An empty collection still renders page 1.
    fn upper_bound(&self) -> usize {
        self.last_page.max(1)
    }

    pub fn jump(&mut self, page: usize) {
        self.page = page.clamp(1, self.upper_bound());
    }

    /// Moves forward by `step` pages without passing the last page.
    pub fn advance(&mut self, step: usize) {
        self.page = self.page.saturating_add(step).min(self.upper_bound());
    }

    /// Moves back by `step` pages without going below page 1.
    pub fn retreat(&mut self, step: usize) {
        self.page = self.page.saturating_sub(step).max(1);
    }

    pub fn next_page(&mut self) {
        self.advance(1);
    }

    pub fn prev_page(&mut self) {
        self.retreat(1);
    }

    /// Page numbers rendered as buttons, at most `window` of them.
    pub fn window(&self, window: usize) -> Vec<usize> {
        get_pages(self.last_page, self.page, window)
    }

    fn moved(self, action: impl FnOnce(&mut Self)) -> usize {
        let mut cursor = self;
        action(&mut cursor);
        cursor.page
    }
}

/// Targets of every control in the page navigation bar.
///
/// Each field holds the page the matching cursor action lands on when taken
/// from the current page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub current: usize,
    pub first: usize,
    pub back_far: usize,
    pub back: usize,
    pub pages: Vec<usize>,
    pub forward: usize,
    pub forward_far: usize,
    pub last: usize,
}

impl Navigation {
    pub fn new(cursor: PageCursor, window: usize) -> Self {
        Self {
            current: cursor.page(),
            first: cursor.moved(|c| c.jump(1)),
            back_far: cursor.moved(|c| c.retreat(FAR_JUMP_STEP)),
            back: cursor.moved(PageCursor::prev_page),
            pages: cursor.window(window),
            forward: cursor.moved(PageCursor::next_page),
            forward_far: cursor.moved(|c| c.advance(FAR_JUMP_STEP)),
            last: cursor.moved(|c| c.jump(cursor.last_page())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub last_page: usize,
}

impl<T> Paginated<T> {
    /// Cuts the requested page out of the full collection.
    ///
    /// `current_page` is clamped into `1..=last_page`, so a missing or
    /// out-of-range page number still yields a valid page.
    pub fn new(mut items: Vec<T>, current_page: usize, per_page: usize) -> Self {
        let cursor = PageCursor::at(current_page, last_page(items.len(), per_page));
        let range = page_range(items.len(), cursor.page(), per_page);
        let items = items.drain(range).collect();

        Self {
            items,
            page: cursor.page(),
            last_page: cursor.last_page(),
        }
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::at(self.page, self.last_page)
    }
}
