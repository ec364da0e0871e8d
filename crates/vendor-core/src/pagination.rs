//! Incremental "load more" window over the filtered view.
//!
//! The window shows the first `page_size * current_page` filtered records.
//! It is reset to the first page whenever `filtered` is recomputed. Growing
//! it is a two-step protocol (begin, then finish) with at most one step in
//! flight; the ticket handed out by `begin` carries the window generation so
//! a completion that arrives after a reset is ignored.

/// Proof of an in-flight "load more" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreTicket {
    generation: u64,
}

/// Pagination state carried in every snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    /// 1-based.
    current_page: usize,
    generation: u64,
    pending: bool,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            generation: 0,
            pending: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// A "load more" step has begun and not finished yet.
    pub fn is_loading_more(&self) -> bool {
        self.pending
    }

    /// Number of records visible out of `total` filtered ones.
    pub fn visible_len(&self, total: usize) -> usize {
        self.page_size.saturating_mul(self.current_page).min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible_len(total) < total
    }

    pub fn remaining(&self, total: usize) -> usize {
        total - self.visible_len(total)
    }

    pub(crate) fn reset(&mut self) {
        self.current_page = 1;
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }

    /// Start growing the window. `None` if a step is already in flight or
    /// everything is visible.
    pub(crate) fn begin(&mut self, total: usize) -> Option<LoadMoreTicket> {
        if self.pending || !self.has_more(total) {
            return None;
        }
        self.pending = true;
        Some(LoadMoreTicket {
            generation: self.generation,
        })
    }

    /// Complete a step. Returns `false` for stale or unknown tickets.
    pub(crate) fn finish(&mut self, ticket: LoadMoreTicket) -> bool {
        if !self.pending || ticket.generation != self.generation {
            return false;
        }
        self.current_page += 1;
        self.pending = false;
        true
    }
}
