//! Vendor catalog data model.
//!
//! Records carry bilingual display text (Persian primary, English secondary),
//! a geographic location, and lifecycle timestamps. Drafts coming from the
//! form layer are validated into [`ValidatedDraft`] before the store will
//! accept them.

pub mod error;
pub mod ids;
pub mod locale;
pub mod stats;
pub mod validation;
pub mod vendor;

pub use error::{ModelError, Result};
pub use ids::VendorId;
pub use locale::{Locale, LocalizedText};
pub use stats::CatalogStats;
pub use validation::{DraftField, FieldIssue, IssueKind, PHONE_PATTERN, ValidationError};
pub use vendor::{Location, ValidatedDraft, Vendor, VendorDraft, VendorStatus, default_logo_url};
