//! Shared inventory constructor for all platforms.
//!
//! Returns an [`Inventory`] backed by the appropriate [`Storage`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`crate::LocalStorageStore`]
//! - **Desktop / Mobile** (native): filesystem via [`crate::FileStore`]

use crate::config::InventoryConfig;
use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::storage::Storage;

/// Open the platform-appropriate inventory with the default configuration.
pub fn open_default() -> Result<Inventory<impl Storage>, InventoryError> {
    open_with_config(&InventoryConfig::default())
}

/// Open the platform-appropriate inventory described by `config`.
///
/// When `config.storage.namespace` is `Some("lab")`:
/// - **Web**: keys are prefixed `lab:`
/// - **Desktop/Mobile**: uses `<data_dir>/lab-inventory/lab/`
///
/// An explicit `config.storage.data_dir` is used as-is on native platforms.
pub fn open_with_config(config: &InventoryConfig) -> Result<Inventory<impl Storage>, InventoryError> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let store = crate::LocalStorageStore::with_namespace(config.storage.namespace.as_deref());
        Inventory::open(store)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let store = crate::FileStore::new(native_data_dir(config));
        tracing::debug!("Opening inventory at {}", store.base().display());
        Inventory::open(store)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        Inventory::open(crate::MemoryStore::new())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_data_dir(config: &InventoryConfig) -> std::path::PathBuf {
    if let Some(dir) = &config.storage.data_dir {
        return dir.clone();
    }
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("lab-inventory");
    match &config.storage.namespace {
        Some(ns) => base.join(ns),
        None => base,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = InventoryConfig::new("chem").with_data_dir("/srv/inventory");
        assert_eq!(
            native_data_dir(&config),
            std::path::PathBuf::from("/srv/inventory")
        );
    }

    #[test]
    fn test_namespace_scopes_data_dir() {
        let scoped = native_data_dir(&InventoryConfig::new("chem"));
        let unscoped = native_data_dir(&InventoryConfig::default());
        assert!(scoped.ends_with("lab-inventory/chem"));
        assert!(unscoped.ends_with("lab-inventory"));
        assert_eq!(scoped.parent(), Some(unscoped.as_path()));
    }

    #[test]
    fn test_open_with_config() {
        let dir = std::env::temp_dir().join(format!("lab_inventory_platform_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let config = InventoryConfig::default().with_data_dir(&dir);

        let mut inventory = open_with_config(&config).unwrap();
        inventory.add_material("Burette", 2).unwrap();

        let reopened = open_with_config(&config).unwrap();
        assert_eq!(reopened.search("burette").len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
