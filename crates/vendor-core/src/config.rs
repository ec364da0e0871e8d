//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Map camera defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Center shown when nothing is selected.
    pub default_center: GeoPoint,
    pub default_zoom: u8,
    /// Zoom used when recentring on a selected vendor.
    pub focus_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: GeoPoint::new(35.6892, 51.389),
            default_zoom: 10,
            focus_zoom: 15,
        }
    }
}

/// Catalog engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Records revealed per "load more" step.
    pub page_size: usize,
    pub map: MapConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            map: MapConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.page_size == 0 {
            return Err(StoreError::Config("page_size must be at least 1".to_string()));
        }
        if !self.map.default_center.is_finite() {
            return Err(StoreError::Config(
                "map.default_center must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.map.focus_zoom, 15);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = CatalogConfig::default().with_page_size(0);
        assert!(matches!(config.validate(), Err(StoreError::Config(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"page_size": 10}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.map, MapConfig::default());
    }
}
