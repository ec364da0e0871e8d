//! Selection shared by the list and map views.
//!
//! There is one selection per snapshot. Picking a card in the list and
//! clicking a marker on the map both go through `CatalogStore::select`; the
//! origin is recorded only so observers can tell who initiated it.

use std::sync::Arc;

use vendor_model::{Vendor, VendorId};

use crate::config::{GeoPoint, MapConfig};

/// Which view issued a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionOrigin {
    List,
    Map,
}

impl SelectionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

/// The active record. Always refers to a record present in `all`.
#[derive(Debug, Clone)]
pub struct Selection {
    vendor: Arc<Vendor>,
    origin: SelectionOrigin,
}

impl Selection {
    pub(crate) fn new(vendor: Arc<Vendor>, origin: SelectionOrigin) -> Self {
        Self { vendor, origin }
    }

    pub fn vendor(&self) -> &Arc<Vendor> {
        &self.vendor
    }

    pub fn id(&self) -> &VendorId {
        &self.vendor.id
    }

    pub fn origin(&self) -> SelectionOrigin {
        self.origin
    }

    /// Same selection pointing at a newer version of the record.
    pub(crate) fn refreshed(&self, vendor: Arc<Vendor>) -> Self {
        Self {
            vendor,
            origin: self.origin,
        }
    }
}

/// Where the map camera should be and which callout is open.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFocus {
    pub center: GeoPoint,
    pub zoom: u8,
    /// Record whose detail callout is open.
    pub callout: Option<VendorId>,
}

impl MapFocus {
    pub fn for_selection(selection: Option<&Selection>, map: &MapConfig) -> Self {
        match selection {
            Some(selection) => {
                let (lat, lng) = selection.vendor().coordinates();
                Self {
                    center: GeoPoint::new(lat, lng),
                    zoom: map.focus_zoom,
                    callout: Some(selection.id().clone()),
                }
            }
            None => Self {
                center: map.default_center,
                zoom: map.default_zoom,
                callout: None,
            },
        }
    }
}
