//! Record provider boundary.
//!
//! The store does not care where records come from; it only needs a single
//! "fetch all" that either yields the ordered collection or fails.

use std::fs;
use std::path::{Path, PathBuf};

use vendor_model::Vendor;

use crate::ProviderError;

pub trait VendorProvider {
    fn fetch_all(&self) -> Result<Vec<Vendor>, ProviderError>;
}

/// Reads a JSON array of vendor records from disk.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VendorProvider for JsonFileProvider {
    fn fetch_all(&self) -> Result<Vec<Vendor>, ProviderError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })?;
        let vendors: Vec<Vendor> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = vendors.len(), "read vendor file");
        Ok(vendors)
    }
}

/// Serves a fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    vendors: Vec<Vendor>,
}

impl StaticProvider {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Parse a JSON array in the vendor file format.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl VendorProvider for StaticProvider {
    fn fetch_all(&self) -> Result<Vec<Vendor>, ProviderError> {
        Ok(self.vendors.clone())
    }
}
