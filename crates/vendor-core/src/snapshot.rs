//! Immutable catalog snapshots.
//!
//! A [`CatalogSnapshot`] is one consistent version of the collection state.
//! Observers only ever see `Arc<CatalogSnapshot>`; transitions build a new
//! snapshot from the previous one and never touch a published value.
//!
//! Every snapshot satisfies:
//! - `filtered` is exactly the records of `all` matching the search term,
//!   in `all` order, sharing allocations with `all`;
//! - `selected`, when set, names a record present in `all`;
//! - ids in `all` are unique;
//! - `loading` implies no `error`.

use std::collections::HashSet;
use std::sync::Arc;

use vendor_model::{CatalogStats, Vendor, VendorId};

use crate::StoreError;
use crate::config::MapConfig;
use crate::pagination::{LoadMoreTicket, PageWindow};
use crate::search::{SearchQuery, filter_vendors};
use crate::selection::{MapFocus, Selection, SelectionOrigin};

#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    version: u64,
    all: Vec<Arc<Vendor>>,
    filtered: Vec<Arc<Vendor>>,
    query: SearchQuery,
    selected: Option<Selection>,
    loading: bool,
    error: Option<String>,
    window: PageWindow,
}

impl CatalogSnapshot {
    pub(crate) fn empty(page_size: usize) -> Self {
        Self {
            version: 0,
            all: Vec::new(),
            filtered: Vec::new(),
            query: SearchQuery::default(),
            selected: None,
            loading: false,
            error: None,
            window: PageWindow::new(page_size),
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Monotonically increasing per published snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[Arc<Vendor>] {
        &self.all
    }

    /// Records matching the current search term.
    pub fn filtered(&self) -> &[Arc<Vendor>] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        self.query.raw()
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn selected_vendor(&self) -> Option<&Arc<Vendor>> {
        self.selected.as_ref().map(Selection::vendor)
    }

    pub fn is_selected(&self, id: &VendorId) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// The part of `filtered` revealed by the pagination window.
    pub fn visible(&self) -> &[Arc<Vendor>] {
        &self.filtered[..self.window.visible_len(self.filtered.len())]
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.filtered.len())
    }

    pub fn remaining(&self) -> usize {
        self.window.remaining(self.filtered.len())
    }

    pub fn find(&self, id: &VendorId) -> Option<&Arc<Vendor>> {
        self.all.iter().find(|vendor| &vendor.id == id)
    }

    pub fn contains(&self, id: &VendorId) -> bool {
        self.find(id).is_some()
    }

    /// Counters over the whole collection, not just the filtered view.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_vendors(self.all.iter().map(Arc::as_ref))
    }

    pub fn map_focus(&self, map: &MapConfig) -> MapFocus {
        MapFocus::for_selection(self.selected.as_ref(), map)
    }

    /// Check the snapshot invariants listed in the module docs.
    pub fn is_consistent(&self) -> bool {
        let mut ids = HashSet::with_capacity(self.all.len());
        if !self.all.iter().all(|vendor| ids.insert(&vendor.id)) {
            return false;
        }
        let expected: Vec<&Arc<Vendor>> = self
            .all
            .iter()
            .filter(|vendor| self.query.matches(vendor))
            .collect();
        let filtered_ok = expected.len() == self.filtered.len()
            && expected
                .iter()
                .zip(&self.filtered)
                .all(|(want, have)| Arc::ptr_eq(want, have));
        let selection_ok = self
            .selected
            .as_ref()
            .is_none_or(|selection| ids.contains(selection.id()));
        let loading_ok = !self.loading || self.error.is_none();
        filtered_ok && selection_ok && loading_ok
    }

    // =========================================================================
    // Transitions (crate-private; the store is the only mutator)
    // =========================================================================

    fn successor(&self) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next
    }

    fn refilter(&mut self) {
        self.filtered = filter_vendors(&self.all, &self.query);
        self.window.reset();
    }

    fn position(&self, id: &VendorId) -> Option<usize> {
        self.all.iter().position(|vendor| &vendor.id == id)
    }

    pub(crate) fn load_started(&self) -> Self {
        let mut next = self.successor();
        next.loading = true;
        next.error = None;
        next
    }

    /// Install a full collection. Ids must already be unique.
    ///
    /// A successful load clears any earlier load error. The selection
    /// survives only if its id is still present, and then points at the new
    /// record.
    pub(crate) fn loaded(&self, all: Vec<Arc<Vendor>>) -> Self {
        let mut next = self.successor();
        next.all = all;
        next.loading = false;
        next.error = None;
        next.selected = self.selected.as_ref().and_then(|selection| {
            next.find(selection.id())
                .map(|vendor| selection.refreshed(Arc::clone(vendor)))
        });
        next.refilter();
        next
    }

    pub(crate) fn load_failed(&self, message: String) -> Self {
        let mut next = self.successor();
        next.loading = false;
        next.error = Some(message);
        next
    }

    pub(crate) fn inserted(&self, vendor: Arc<Vendor>) -> Self {
        let mut next = self.successor();
        next.all.push(vendor);
        next.refilter();
        next
    }

    pub(crate) fn replaced(&self, vendor: Arc<Vendor>) -> Result<Self, StoreError> {
        let index = self.position(&vendor.id).ok_or_else(|| StoreError::NotFound {
            id: vendor.id.clone(),
        })?;
        let mut next = self.successor();
        if let Some(selection) = &self.selected
            && selection.id() == &vendor.id
        {
            next.selected = Some(selection.refreshed(Arc::clone(&vendor)));
        }
        next.all[index] = vendor;
        next.refilter();
        Ok(next)
    }

    pub(crate) fn removed(&self, id: &VendorId) -> Result<Self, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        let mut next = self.successor();
        next.all.remove(index);
        if self.is_selected(id) {
            next.selected = None;
        }
        next.refilter();
        Ok(next)
    }

    pub(crate) fn searched(&self, term: &str) -> Self {
        let mut next = self.successor();
        next.query = SearchQuery::new(term);
        next.refilter();
        next
    }

    pub(crate) fn selected_as(
        &self,
        id: Option<&VendorId>,
        origin: SelectionOrigin,
    ) -> Result<Self, StoreError> {
        let selected = match id {
            Some(id) => {
                let vendor = self
                    .find(id)
                    .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
                Some(Selection::new(Arc::clone(vendor), origin))
            }
            None => None,
        };
        let mut next = self.successor();
        next.selected = selected;
        Ok(next)
    }

    pub(crate) fn load_more_started(&self) -> Option<(Self, LoadMoreTicket)> {
        let mut next = self.successor();
        let ticket = next.window.begin(self.filtered.len())?;
        Some((next, ticket))
    }

    pub(crate) fn load_more_finished(&self, ticket: LoadMoreTicket) -> Option<Self> {
        let mut next = self.successor();
        next.window.finish(ticket).then_some(next)
    }
}
