//! Intents issued by observer views.

use vendor_model::{ValidatedDraft, Vendor, VendorId};

use crate::pagination::LoadMoreTicket;
use crate::selection::{MapFocus, SelectionOrigin};

/// Every way the catalog state can change.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Bulk load
    // =========================================================================
    LoadStarted,
    LoadSucceeded(Vec<Vendor>),
    LoadFailed(String),

    // =========================================================================
    // Record edits
    // =========================================================================
    Create(ValidatedDraft),
    /// Edit form for an existing record.
    Update { id: VendorId, draft: ValidatedDraft },
    Delete(VendorId),

    // =========================================================================
    // View intents
    // =========================================================================
    SetSearchTerm(String),
    Select {
        id: Option<VendorId>,
        origin: SelectionOrigin,
    },
    LoadMore,
    LoadMoreFinished(LoadMoreTicket),
}

/// Follow-up work for the caller after a message was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A record was created with this id.
    Created(VendorId),
    /// A "load more" step started; report back with `LoadMoreFinished`.
    FetchMore(LoadMoreTicket),
    /// The map should move its camera and callout.
    Focus(MapFocus),
}
