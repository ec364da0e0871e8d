#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use vendor_core::{CatalogConfig, CatalogStore, ManualClock, SequentialIds};
use vendor_model::{
    LocalizedText, Location, ValidatedDraft, Vendor, VendorDraft, VendorId, VendorStatus,
};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub fn id(value: &str) -> VendorId {
    VendorId::new(value).unwrap()
}

pub fn vendor(id_value: &str, brand_en: &str, owner_en: &str) -> Vendor {
    Vendor {
        id: id(id_value),
        username: format!("handle_{id_value}"),
        brand_name: LocalizedText::new(format!("برند {id_value}"), brand_en),
        owner_name: LocalizedText::new(format!("مالک {id_value}"), owner_en),
        phone_number: phone_for(id_value),
        location: Location::new(35.7, 51.4, LocalizedText::new("تهران", "Tehran")),
        logo_url: String::new(),
        status: VendorStatus::Active,
        created_at: t0(),
        updated_at: t0(),
    }
}

/// A valid mobile number derived from the id.
pub fn phone_for(id_value: &str) -> String {
    let digits = id_value.bytes().map(u32::from).sum::<u32>() % 10_000;
    format!("0912000{digits:04}")
}

/// Edit form pre-filled from the stored record, changed by `edit`.
pub fn edit(
    store: &CatalogStore,
    id_value: &str,
    change: impl FnOnce(&mut VendorDraft),
) -> ValidatedDraft {
    let snap = store.snapshot();
    let existing = snap.find(&id(id_value)).expect("record to edit exists");
    let mut draft = VendorDraft::from_vendor(existing);
    change(&mut draft);
    draft.validate().expect("edited draft is valid")
}

pub fn draft(brand_fa: &str, brand_en: &str) -> ValidatedDraft {
    VendorDraft {
        brand_name: LocalizedText::new(brand_fa, brand_en),
        owner_name: LocalizedText::new("علی رضایی", "Ali Rezaei"),
        phone_number: "09121234567".to_string(),
        ..VendorDraft::default()
    }
    .validate()
    .expect("test draft is valid")
}

/// Store with a manual clock at `t0()` and ids `v-1`, `v-2`, ...
pub fn store_with(page_size: usize) -> (CatalogStore, ManualClock) {
    let clock = ManualClock::at(t0());
    let store = CatalogStore::new(CatalogConfig::default().with_page_size(page_size))
        .unwrap()
        .with_clock(clock.clone())
        .with_id_generator(SequentialIds::new("v"));
    (store, clock)
}

pub fn store() -> (CatalogStore, ManualClock) {
    store_with(6)
}

pub fn ids(vendors: &[std::sync::Arc<Vendor>]) -> Vec<String> {
    vendors.iter().map(|v| v.id.to_string()).collect()
}
