//! Command implementations. Each one drives the catalog store and returns
//! a report for the binary to print.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use vendor_core::{
    CatalogConfig, CatalogStore, JsonFileProvider, MapFocus, SelectionOrigin, StaticProvider,
    VendorProvider,
};
use vendor_model::{CatalogStats, Vendor, VendorId};

use crate::logging::redact_value;

/// Records used when no `--data` file is given.
pub const SAMPLE_VENDORS: &str = include_str!("../data/sample_vendors.json");

/// One page-window view of the filtered records.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Search term, if one was applied.
    pub term: Option<String>,
    pub rows: Vec<Arc<Vendor>>,
    pub matched: usize,
    pub total: usize,
    pub remaining: usize,
    pub page: usize,
}

#[derive(Debug, Clone)]
pub struct Detail {
    pub vendor: Arc<Vendor>,
    pub origin: SelectionOrigin,
    pub focus: MapFocus,
}

/// Create a store and run one bulk load from `data`, or from the bundled
/// sample records.
pub fn open_store(config: CatalogConfig, data: Option<&Path>) -> Result<CatalogStore> {
    let source = data.map_or_else(|| "sample".to_string(), |path| path.display().to_string());
    let span = info_span!("load", %source);
    let _guard = span.enter();
    let mut store = CatalogStore::new(config).context("configure catalog")?;
    let provider: Box<dyn VendorProvider> = match data {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(
            StaticProvider::from_json(SAMPLE_VENDORS).context("parse sample vendors")?,
        ),
    };
    store
        .load_from(provider.as_ref())
        .context("load vendor records")?;
    info!(records = store.snapshot().all().len(), "catalog ready");
    Ok(store)
}

/// Reveal up to `pages` pages of the current filtered view.
fn reveal_pages(store: &mut CatalogStore, pages: usize) {
    for _ in 1..pages {
        if !store.load_more() {
            break;
        }
    }
}

fn listing(store: &CatalogStore, term: Option<String>) -> Listing {
    let snap = store.snapshot();
    Listing {
        term,
        rows: snap.visible().to_vec(),
        matched: snap.filtered().len(),
        total: snap.all().len(),
        remaining: snap.remaining(),
        page: snap.window().current_page(),
    }
}

pub fn run_list(store: &mut CatalogStore, pages: usize) -> Listing {
    reveal_pages(store, pages);
    listing(store, None)
}

pub fn run_search(store: &mut CatalogStore, term: &str, pages: usize) -> Listing {
    debug!(term = redact_value(term), "searching");
    store.set_search_term(term);
    reveal_pages(store, pages);
    listing(store, Some(term.to_string()))
}

/// Select a record the way the list or the map would.
pub fn run_show(store: &mut CatalogStore, id: &str, origin: SelectionOrigin) -> Result<Detail> {
    let id = VendorId::new(id).context("parse vendor id")?;
    let focus = store
        .select(Some(&id), origin)
        .with_context(|| format!("select vendor {id}"))?;
    let snap = store.snapshot();
    let vendor = snap
        .selected_vendor()
        .cloned()
        .with_context(|| format!("vendor {id} not selected"))?;
    debug!(%id, phone = redact_value(&vendor.phone_number), "showing vendor");
    Ok(Detail {
        vendor,
        origin,
        focus,
    })
}

pub fn run_stats(store: &CatalogStore) -> CatalogStats {
    store.snapshot().stats()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_parses() {
        let provider = StaticProvider::from_json(SAMPLE_VENDORS).unwrap();
        let vendors = provider.fetch_all().unwrap();
        assert_eq!(vendors.len(), 8);
    }

    #[test]
    fn pages_beyond_the_end_stop_early() {
        let mut store = open_store(CatalogConfig::default(), None).unwrap();
        let listing = run_list(&mut store, 10);
        assert_eq!(listing.rows.len(), 8);
        assert_eq!(listing.page, 2);
        assert_eq!(listing.remaining, 0);
    }
}
