//! Error types for the catalog engine.

use std::path::PathBuf;

use thiserror::Error;
use vendor_model::VendorId;

/// Failures of store transitions.
///
/// `NotFound` only happens when a caller acts on an id that is not in the
/// current snapshot; the transition is dropped and the state left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("vendor not found: {id}")]
    NotFound { id: VendorId },

    #[error("failed to load vendors: {message}")]
    Load { message: String },

    #[error("could not allocate a unique vendor id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    #[error("invalid catalog configuration: {0}")]
    Config(String),
}

/// Failures of the record provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vendor data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),
}
