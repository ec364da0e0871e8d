use std::collections::HashSet;

use vendor_model::{Vendor, VendorId};

/// Drop records whose id was already seen. First occurrence wins.
///
/// Returns the kept records in their original order and the ids of the
/// dropped duplicates.
pub(crate) fn dedupe_by_id(vendors: Vec<Vendor>) -> (Vec<Vendor>, Vec<VendorId>) {
    let mut seen = HashSet::with_capacity(vendors.len());
    let mut dropped = Vec::new();
    let mut kept = Vec::with_capacity(vendors.len());
    for vendor in vendors {
        if seen.insert(vendor.id.clone()) {
            kept.push(vendor);
        } else {
            dropped.push(vendor.id);
        }
    }
    (kept, dropped)
}
