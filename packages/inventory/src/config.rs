//! # Inventory configuration — `inventory.toml`
//!
//! Controls where [`crate::platform`] keeps the inventory.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! namespace = "chem-lab"      # optional: scopes localStorage keys / the data subfolder
//! data_dir = "/var/lib/inv"   # optional: native only, overrides the platform data dir
//! ```
//!
//! All structs derive `Default`, so a missing or empty config file is equivalent
//! to the default configuration (unscoped keys, platform data directory).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `inventory.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage location settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Keeps separate inventories apart in the same browser or data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Explicit directory for the native file store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl InventoryConfig {
    /// Create a config scoped to the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            storage: StorageConfig {
                namespace: Some(namespace.into()),
                data_dir: None,
            },
        }
    }

    /// Builder method to pin the native data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = Some(dir.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "inventory.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
