//! src/model/pagination.rs
//! ============================================================================
//! # `RevealWindow`: Incremental Result Pagination
//!
//! Tracks how many of the ordered query results are currently revealed.
//! "Load more" advances the window over the already-computed result set;
//! no re-query happens. Any criteria change rebinds the window to the new
//! total and resets the reveal count.

/// Default number of cards revealed per step.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealWindow {
    page_size: usize,
    total: usize,
    revealed: usize,
}

impl RevealWindow {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self::with_page_size(PAGE_SIZE, total)
    }

    #[must_use]
    pub fn with_page_size(page_size: usize, total: usize) -> Self {
        let mut window = Self {
            page_size: page_size.max(1),
            total,
            revealed: 0,
        };
        window.reset();
        window
    }

    /// Restore the initial reveal count for the current total.
    pub fn reset(&mut self) -> usize {
        self.revealed = self.page_size.min(self.total);
        self.revealed
    }

    /// Point the window at a freshly computed result set and reset.
    pub fn rebind(&mut self, total: usize) -> usize {
        self.total = total;
        self.reset()
    }

    /// Reveal one more page, capped at the total.
    pub fn advance(&mut self) -> usize {
        self.revealed = (self.revealed + self.page_size).min(self.total);
        self.revealed
    }

    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the "load more" affordance is actionable.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.revealed < self.total
    }

    /// `(shown, total)` for the "Showing X of Y" line.
    #[must_use]
    pub fn summary(&self) -> (usize, usize) {
        (self.revealed, self.total)
    }
}
