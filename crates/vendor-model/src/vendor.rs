//! Vendor records and drafts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{LocalizedText, Locale, ModelError, VendorId};

const AVATAR_SERVICE: &str = "https://avatar.iran.liara.run/public/girl";

/// Lifecycle status shown as a colored chip next to each vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl VendorStatus {
    pub const ALL: [VendorStatus; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Geographic position plus the bilingual street address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: LocalizedText,
}

impl Location {
    /// Default position for new drafts (central Tehran).
    pub const DEFAULT_LAT: f64 = 35.6892;
    pub const DEFAULT_LNG: f64 = 51.389;

    pub fn new(lat: f64, lng: f64, address: LocalizedText) -> Self {
        Self { lat, lng, address }
    }

    /// Region bucket: coordinates rounded to one decimal place.
    ///
    /// Stored as tenths so the key is hashable.
    pub fn region_key(&self) -> (i64, i64) {
        #[allow(clippy::cast_possible_truncation)]
        let round = |deg: f64| (deg * 10.0).round() as i64;
        (round(self.lat), round(self.lng))
    }
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    /// Internal handle, searchable but never shown as a display name.
    pub username: String,
    pub brand_name: LocalizedText,
    pub owner_name: LocalizedText,
    pub phone_number: String,
    pub location: Location,
    pub logo_url: String,
    pub status: VendorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn brand(&self, locale: Locale) -> &str {
        self.brand_name.get(locale)
    }

    pub fn owner(&self, locale: Locale) -> &str {
        self.owner_name.get(locale)
    }

    pub fn address(&self, locale: Locale) -> &str {
        self.location.address.get(locale)
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.location.lat, self.location.lng)
    }

    pub fn is_active(&self) -> bool {
        self.status == VendorStatus::Active
    }
}

/// Form payload for creating or editing a vendor.
///
/// A draft has no identity or timestamps; those are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    /// Handle to use; the store synthesizes one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub brand_name: LocalizedText,
    pub owner_name: LocalizedText,
    pub phone_number: String,
    pub location: Location,
    /// Empty means "use the generated avatar".
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub status: VendorStatus,
}

impl Default for VendorDraft {
    fn default() -> Self {
        Self {
            username: None,
            brand_name: LocalizedText::default(),
            owner_name: LocalizedText::default(),
            phone_number: String::new(),
            location: Location::new(
                Location::DEFAULT_LAT,
                Location::DEFAULT_LNG,
                LocalizedText::default(),
            ),
            logo_url: String::new(),
            status: VendorStatus::Active,
        }
    }
}

impl VendorDraft {
    /// Pre-fill a draft from an existing record (edit mode).
    pub fn from_vendor(vendor: &Vendor) -> Self {
        Self {
            username: Some(vendor.username.clone()),
            brand_name: vendor.brand_name.clone(),
            owner_name: vendor.owner_name.clone(),
            phone_number: vendor.phone_number.clone(),
            location: vendor.location.clone(),
            logo_url: vendor.logo_url.clone(),
            status: vendor.status,
        }
    }

    /// Logo to store: the explicit URL, or the generated avatar.
    pub fn resolved_logo_url(&self) -> String {
        if self.logo_url.trim().is_empty() {
            default_logo_url(&self.brand_name.en)
        } else {
            self.logo_url.clone()
        }
    }
}

/// A draft that passed [`VendorDraft::validate`].
///
/// Only the validation module can construct one, so holding a
/// `ValidatedDraft` is proof the form checks ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft(VendorDraft);

impl ValidatedDraft {
    pub(crate) fn new(draft: VendorDraft) -> Self {
        Self(draft)
    }

    pub fn draft(&self) -> &VendorDraft {
        &self.0
    }

    pub fn into_inner(self) -> VendorDraft {
        self.0
    }

    /// Merge the edited fields into `existing`, keeping identity and timestamps.
    ///
    /// The handle is only replaced when the draft names one. A blank logo
    /// resolves to the generated avatar, as on create.
    pub fn apply_to(self, existing: &Vendor) -> Vendor {
        let logo_url = self.0.resolved_logo_url();
        let draft = self.0;
        Vendor {
            id: existing.id.clone(),
            username: draft.username.unwrap_or_else(|| existing.username.clone()),
            brand_name: draft.brand_name,
            owner_name: draft.owner_name,
            phone_number: draft.phone_number,
            location: draft.location,
            logo_url,
            status: draft.status,
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        }
    }
}

/// Avatar URL used when a vendor has no logo of its own.
pub fn default_logo_url(brand_en: &str) -> String {
    match Url::parse_with_params(AVATAR_SERVICE, &[("username", brand_en)]) {
        Ok(url) => url.into(),
        Err(_) => AVATAR_SERVICE.to_string(),
    }
}
