//! Presentation configuration loaded from TOML.
//!
//! ```toml
//! title = "Product Categories"
//! search_placeholder = "Search"
//! empty_message = "No products matching selected criteria"
//! reset_label = "Reset all filters"
//! log_level = "warn"
//! fixture_dir = "/path/to/fixture"
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Labels and startup options for the table page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default = "default_reset_label")]
    pub reset_label: String,
    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory with `users.json`, `categories.json`, `products.json`;
    /// the embedded demo data is used when unset
    #[serde(default)]
    pub fixture_dir: Option<PathBuf>,
}

fn default_title() -> String {
    "Product Categories".to_string()
}
fn default_search_placeholder() -> String {
    "Search".to_string()
}
fn default_empty_message() -> String {
    "No products matching selected criteria".to_string()
}
fn default_reset_label() -> String {
    "Reset all filters".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            search_placeholder: default_search_placeholder(),
            empty_message: default_empty_message(),
            reset_label: default_reset_label(),
            log_level: default_log_level(),
            fixture_dir: None,
        }
    }
}

impl TableConfig {
    /// Default location: `<config dir>/catalog/table.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("catalog").join("table.toml"))
    }

    /// Load the config from its default location, or defaults when absent.
    pub fn discover() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => load_config(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Load a config from a TOML file
pub fn load_config(path: &Path) -> Result<TableConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let config = TableConfig::from_toml_str(&content)?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}
