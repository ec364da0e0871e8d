//! Settings persistence: load and save the catalog configuration.
//!
//! The configuration is stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/com.vendor-panel.Vendor Panel/
//! - Windows: %APPDATA%/vendor-panel/Vendor Panel/config/
//! - Linux: ~/.config/vendorpanel/
//!
//! An explicit `--config` path must load; the platform file is optional and
//! any problem with it falls back to defaults with a logged reason.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use vendor_core::CatalogConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "vendor-panel";
const APP_NAME: &str = "Vendor Panel";
const CONFIG_FILENAME: &str = "settings.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from a file.
    File(PathBuf),
    /// Built-in defaults, with the reason no file was used.
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults(reason) => write!(f, "built-in defaults ({reason})"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CatalogConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    fn defaults(reason: impl Into<String>) -> Self {
        Self {
            config: CatalogConfig::default(),
            source: ConfigSource::Defaults(reason.into()),
        }
    }
}

/// Get the path to the platform settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parse and validate a TOML configuration.
pub fn parse_config(content: &str) -> Result<CatalogConfig> {
    let config: CatalogConfig = toml::from_str(content).context("parse settings")?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration from an explicit file. Any failure is an error.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("load settings {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

/// Load the configuration from `path`, falling back to defaults if the file
/// is missing, unreadable or invalid.
pub fn load_config_or_default(path: &Path) -> LoadedConfig {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded settings");
                LoadedConfig {
                    config,
                    source: ConfigSource::File(path.to_path_buf()),
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "invalid settings file, using defaults: {error:#}");
                LoadedConfig::defaults(format!("invalid settings at {}", path.display()))
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file found, using defaults");
            LoadedConfig::defaults("no settings file")
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read settings file, using defaults");
            LoadedConfig::defaults(format!("unreadable settings at {}", path.display()))
        }
    }
}

/// Resolve the effective configuration: the explicit path if given, else the
/// platform settings file, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    match settings_path() {
        Some(path) => Ok(load_config_or_default(&path)),
        None => {
            tracing::warn!("could not determine settings path, using defaults");
            Ok(LoadedConfig::defaults("no settings directory"))
        }
    }
}

/// Save the configuration to `path`, creating the parent directory if needed.
pub fn save_config(config: &CatalogConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = render_config(config)?;
    fs::write(path, content).with_context(|| format!("write settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

pub fn render_config(config: &CatalogConfig) -> Result<String> {
    toml::to_string_pretty(config).context("serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = parse_config("page_size = 10\n").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.map, CatalogConfig::default().map);
    }

    #[test]
    fn nested_map_table_is_read() {
        let config = parse_config(
            "[map]\nfocus_zoom = 17\n\n[map.default_center]\nlat = 29.61\nlng = 52.53\n",
        )
        .unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.map.focus_zoom, 17);
        assert_eq!(config.map.default_center.lat, 29.61);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = parse_config("page_size = 0").unwrap_err();
        assert!(format!("{err:#}").contains("page_size"));
    }

    #[test]
    fn rendered_defaults_parse_back() {
        let rendered = render_config(&CatalogConfig::default()).unwrap();
        assert_eq!(parse_config(&rendered).unwrap(), CatalogConfig::default());
    }
}
