//! Search/filter pipeline.
//!
//! `filtered` is always recomputed from scratch as
//! `{ v in all : query.matches(v) }`, in the order of `all`. Collections are
//! small, so there is no incremental index to drift out of sync.
//!
//! Matching is plain substring containment, OR-ed across fields:
//! brand name, owner name and address in both locales, the raw phone
//! number, and the internal username. Localized text is folded with its own
//! locale's rule before comparison. The term is never trimmed.

use std::sync::Arc;

use vendor_model::{Locale, Vendor};

/// A search term prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    folded_fa: String,
    folded_en: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            raw: term.to_string(),
            folded_fa: Locale::Fa.fold(term),
            folded_en: Locale::En.fold(term),
        }
    }

    /// The term exactly as the caller supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn folded(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fa => &self.folded_fa,
            Locale::En => &self.folded_en,
        }
    }

    fn localized_match(&self, locale: Locale, text: &str) -> bool {
        locale.fold(text).contains(self.folded(locale))
    }

    /// Whether `vendor` belongs in the filtered view for this term.
    pub fn matches(&self, vendor: &Vendor) -> bool {
        if self.is_empty() {
            return true;
        }
        let localized = [
            &vendor.brand_name,
            &vendor.owner_name,
            &vendor.location.address,
        ];
        localized.iter().any(|text| {
            text.iter()
                .any(|(locale, value)| self.localized_match(locale, value))
        }) || vendor.phone_number.contains(&self.raw)
            || self.localized_match(Locale::En, &vendor.username)
    }
}

/// Derive the filtered view of `all` for `query`.
///
/// Returned entries share their allocation with `all`.
pub fn filter_vendors(all: &[Arc<Vendor>], query: &SearchQuery) -> Vec<Arc<Vendor>> {
    if query.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|vendor| query.matches(vendor))
        .cloned()
        .collect()
}
