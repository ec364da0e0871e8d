//! The record store: sole owner and mutator of the catalog state.
//!
//! Each operation derives a new [`CatalogSnapshot`] from the current one,
//! swaps it in, and publishes it to subscribers. Operations run to
//! completion one at a time (`&mut self`), so no observer can see a
//! half-applied transition.

use std::sync::Arc;

use tracing::{debug, info, warn};
use vendor_model::{ValidatedDraft, Vendor, VendorId};

use crate::StoreError;
use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::config::CatalogConfig;
use crate::dedupe::dedupe_by_id;
use crate::message::{Effect, Message};
use crate::pagination::LoadMoreTicket;
use crate::provider::VendorProvider;
use crate::selection::{MapFocus, SelectionOrigin};
use crate::snapshot::CatalogSnapshot;
use crate::subscription::{SnapshotReceiver, Subscribers};

/// Attempts at drawing an unused id before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

pub struct CatalogStore {
    snapshot: Arc<CatalogSnapshot>,
    config: CatalogConfig,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    subscribers: Subscribers,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("version", &self.snapshot.version())
            .field("records", &self.snapshot.all().len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Create an empty store with the wall clock and random ids.
    pub fn new(config: CatalogConfig) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(Self {
            snapshot: Arc::new(CatalogSnapshot::empty(config.page_size)),
            config,
            clock: Box::new(SystemClock),
            ids: Box::new(UuidGenerator),
            subscribers: Subscribers::default(),
        })
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Observe snapshots. The receiver gets the current one immediately.
    pub fn subscribe(&mut self) -> SnapshotReceiver {
        self.subscribers.subscribe(&self.snapshot)
    }

    pub fn map_focus(&self) -> MapFocus {
        self.snapshot.map_focus(&self.config.map)
    }

    fn commit(&mut self, next: CatalogSnapshot, reason: &'static str) {
        debug_assert!(next.is_consistent(), "inconsistent snapshot after {reason}");
        debug!(
            reason,
            version = next.version(),
            records = next.all().len(),
            filtered = next.filtered().len(),
            "snapshot published"
        );
        self.snapshot = Arc::new(next);
        self.subscribers.publish(&self.snapshot);
    }

    // =========================================================================
    // Bulk load
    // =========================================================================

    /// Mark a bulk load as in flight. Returns `false` (and does nothing) if
    /// one already is.
    pub fn load_start(&mut self) -> bool {
        if self.snapshot.is_loading() {
            warn!("bulk load already in progress; ignoring duplicate start");
            return false;
        }
        let next = self.snapshot.load_started();
        self.commit(next, "load started");
        true
    }

    /// Replace the whole collection. Calling it again replaces again.
    pub fn load_succeeded(&mut self, vendors: Vec<Vendor>) {
        let (vendors, dropped) = dedupe_by_id(vendors);
        for id in &dropped {
            warn!(%id, "dropping vendor with duplicate id");
        }
        info!(count = vendors.len(), duplicates = dropped.len(), "vendors loaded");
        let all = vendors.into_iter().map(Arc::new).collect();
        let next = self.snapshot.loaded(all);
        self.commit(next, "load succeeded");
    }

    /// Record a failed load. The previous collection stays in place.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "vendor load failed");
        let next = self.snapshot.load_failed(message);
        self.commit(next, "load failed");
    }

    /// Run a full load cycle against `provider`.
    ///
    /// A duplicate call while a load is pending is a no-op.
    pub fn load_from(&mut self, provider: &dyn VendorProvider) -> Result<(), StoreError> {
        if !self.load_start() {
            return Ok(());
        }
        match provider.fetch_all() {
            Ok(vendors) => {
                self.load_succeeded(vendors);
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                self.load_failed(message.clone());
                Err(StoreError::Load { message })
            }
        }
    }

    // =========================================================================
    // Record edits
    // =========================================================================

    fn fresh_id(&mut self) -> Result<VendorId, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            match VendorId::new(candidate) {
                Ok(id) if !self.snapshot.contains(&id) => return Ok(id),
                Ok(id) => debug!(%id, "generated id collides; retrying"),
                Err(error) => debug!(%error, "generated id rejected; retrying"),
            }
        }
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Append a new record built from a validated draft.
    pub fn create(&mut self, draft: ValidatedDraft) -> Result<VendorId, StoreError> {
        let id = self.fresh_id()?;
        let now = self.clock.now();
        let draft = draft.into_inner();
        let logo_url = draft.resolved_logo_url();
        let username = draft
            .username
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("vendor{}", now.timestamp_millis()));
        let vendor = Vendor {
            id: id.clone(),
            username,
            brand_name: draft.brand_name,
            owner_name: draft.owner_name,
            phone_number: draft.phone_number,
            location: draft.location,
            logo_url,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        info!(%id, "vendor created");
        let next = self.snapshot.inserted(Arc::new(vendor));
        self.commit(next, "create");
        Ok(id)
    }

    /// Apply an edit form to the record with `id`, keeping its position.
    ///
    /// Identity, username (unless the draft names one) and `created_at` come
    /// from the stored record; `updated_at` never moves backwards.
    pub fn update(&mut self, id: &VendorId, draft: ValidatedDraft) -> Result<(), StoreError> {
        let Some(existing) = self.snapshot.find(id) else {
            warn!(%id, "update of unknown vendor ignored");
            return Err(StoreError::NotFound { id: id.clone() });
        };
        let mut vendor = draft.apply_to(existing);
        vendor.updated_at = self
            .clock
            .now()
            .max(existing.updated_at)
            .max(existing.created_at);
        info!(%id, "vendor updated");
        let next = self.snapshot.replaced(Arc::new(vendor))?;
        self.commit(next, "update");
        Ok(())
    }

    pub fn delete(&mut self, id: &VendorId) -> Result<(), StoreError> {
        match self.snapshot.removed(id) {
            Ok(next) => {
                info!(%id, "vendor deleted");
                self.commit(next, "delete");
                Ok(())
            }
            Err(error) => {
                warn!(%id, "delete of unknown vendor ignored");
                Err(error)
            }
        }
    }

    // =========================================================================
    // View intents
    // =========================================================================

    /// Store `term` as given and recompute the filtered view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        let next = self.snapshot.searched(&term);
        debug!(
            term_len = term.chars().count(),
            matches = next.filtered().len(),
            "search term applied"
        );
        self.commit(next, "search");
    }

    /// Change the active record. `None` clears it.
    pub fn select(
        &mut self,
        id: Option<&VendorId>,
        origin: SelectionOrigin,
    ) -> Result<MapFocus, StoreError> {
        match self.snapshot.selected_as(id, origin) {
            Ok(next) => {
                debug!(id = ?id.map(VendorId::as_str), origin = origin.as_str(), "selection changed");
                self.commit(next, "select");
                Ok(self.map_focus())
            }
            Err(error) => {
                warn!(%error, origin = origin.as_str(), "selection of unknown vendor ignored");
                Err(error)
            }
        }
    }

    /// Begin revealing another page. `None` when a step is already pending
    /// or nothing is left to reveal.
    pub fn begin_load_more(&mut self) -> Option<LoadMoreTicket> {
        let Some((next, ticket)) = self.snapshot.load_more_started() else {
            debug!(
                pending = self.snapshot.window().is_loading_more(),
                remaining = self.snapshot.remaining(),
                "load more skipped"
            );
            return None;
        };
        self.commit(next, "load more started");
        Some(ticket)
    }

    /// Finish a step begun by [`Self::begin_load_more`]. Stale tickets are
    /// ignored and return `false`.
    pub fn finish_load_more(&mut self, ticket: LoadMoreTicket) -> bool {
        match self.snapshot.load_more_finished(ticket) {
            Some(next) => {
                self.commit(next, "load more finished");
                true
            }
            None => {
                debug!("stale load-more completion ignored");
                false
            }
        }
    }

    /// Begin and immediately finish a load-more step.
    pub fn load_more(&mut self) -> bool {
        self.begin_load_more()
            .is_some_and(|ticket| self.finish_load_more(ticket))
    }

    // =========================================================================
    // Message dispatch
    // =========================================================================

    /// Apply one message. Failed transitions leave the state unchanged.
    pub fn dispatch(&mut self, message: Message) -> Result<Effect, StoreError> {
        match message {
            Message::LoadStarted => {
                self.load_start();
                Ok(Effect::None)
            }
            Message::LoadSucceeded(vendors) => {
                self.load_succeeded(vendors);
                Ok(Effect::None)
            }
            Message::LoadFailed(reason) => {
                self.load_failed(reason);
                Ok(Effect::None)
            }
            Message::Create(draft) => self.create(draft).map(Effect::Created),
            Message::Update { id, draft } => self.update(&id, draft).map(|()| Effect::None),
            Message::Delete(id) => self.delete(&id).map(|()| Effect::None),
            Message::SetSearchTerm(term) => {
                self.set_search_term(term);
                Ok(Effect::None)
            }
            Message::Select { id, origin } => self.select(id.as_ref(), origin).map(Effect::Focus),
            Message::LoadMore => Ok(self
                .begin_load_more()
                .map_or(Effect::None, Effect::FetchMore)),
            Message::LoadMoreFinished(ticket) => {
                self.finish_load_more(ticket);
                Ok(Effect::None)
            }
        }
    }
}
