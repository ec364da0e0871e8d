//! Vendor catalog state engine.
//!
//! - [`CatalogStore`]: single owner of the collection state; applies
//!   intents and publishes immutable [`CatalogSnapshot`]s.
//! - [`search`]: derives the filtered view from the full collection.
//! - [`selection`] and [`pagination`]: the shared list/map selection and the
//!   incremental "load more" window.

pub mod clock;
pub mod config;
mod dedupe;
pub mod error;
pub mod message;
pub mod pagination;
pub mod provider;
pub mod search;
pub mod selection;
pub mod snapshot;
pub mod store;
mod subscription;

pub use clock::{Clock, IdGenerator, ManualClock, SequentialIds, SystemClock, UuidGenerator};
pub use config::{CatalogConfig, GeoPoint, MapConfig};
pub use error::{ProviderError, StoreError};
pub use message::{Effect, Message};
pub use pagination::{LoadMoreTicket, PageWindow};
pub use provider::{JsonFileProvider, StaticProvider, VendorProvider};
pub use search::{SearchQuery, filter_vendors};
pub use selection::{MapFocus, Selection, SelectionOrigin};
pub use snapshot::CatalogSnapshot;
pub use store::{CatalogStore, MAX_ID_ATTEMPTS};
pub use subscription::SnapshotReceiver;
