//! Headline counters shown above the vendor list.

use std::collections::HashSet;

use serde::Serialize;

use crate::Vendor;

/// Summary counts over a vendor collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    /// Distinct locations at one-decimal-degree resolution.
    pub unique_regions: usize,
}

impl CatalogStats {
    pub fn from_vendors<'a>(vendors: impl IntoIterator<Item = &'a Vendor>) -> Self {
        let mut stats = Self::default();
        let mut regions = HashSet::new();
        for vendor in vendors {
            stats.total += 1;
            if vendor.is_active() {
                stats.active += 1;
            }
            regions.insert(vendor.location.region_key());
        }
        stats.unique_regions = regions.len();
        stats
    }
}
