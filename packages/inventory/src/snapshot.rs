//! # Snapshot — the persisted form of an inventory
//!
//! A [`Snapshot`] is both collections plus the schema version they were written
//! with. [`Persistence`] is the load/save seam [`crate::Inventory`] depends on;
//! every [`Storage`] gets it through a blanket impl that uses this layout:
//!
//! | Key | Value |
//! |-----|-------|
//! | `schema_version` | Decimal schema version, currently [`SCHEMA_VERSION`]. |
//! | `materials` | JSON array of [`Material`] records. |
//! | `loans` | JSON array of [`Loan`] records, dates as `YYYY-MM-DD`. |
//!
//! A missing collection key loads as an empty collection. A missing version key
//! is a store written before versioning and is read as version 1. Loaded records
//! are trusted as-is: nothing checks them against the stock invariant.

use serde::de::DeserializeOwned;

use crate::error::InventoryError;
use crate::models::{Loan, Material};
use crate::storage::Storage;

pub const SCHEMA_VERSION: u32 = 1;

pub const VERSION_KEY: &str = "schema_version";
pub const MATERIALS_KEY: &str = "materials";
pub const LOANS_KEY: &str = "loans";

/// Both inventory collections, as loaded from or written to storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub schema_version: u32,
    pub materials: Vec<Material>,
    pub loans: Vec<Loan>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            materials: Vec::new(),
            loans: Vec::new(),
        }
    }
}

/// Load/save seam for [`crate::Inventory`].
pub trait Persistence {
    fn load(&self) -> Result<Snapshot, InventoryError>;

    /// Write the whole snapshot, replacing what was stored.
    fn save(&self, snapshot: &Snapshot) -> Result<(), InventoryError>;
}

impl<S: Storage> Persistence for S {
    fn load(&self) -> Result<Snapshot, InventoryError> {
        let schema_version = match self.get_item(VERSION_KEY)? {
            Some(raw) => parse_version(&raw)?,
            None => {
                if self.get_item(MATERIALS_KEY)?.is_some() {
                    tracing::warn!("Loading unversioned inventory as schema {}", SCHEMA_VERSION);
                }
                SCHEMA_VERSION
            }
        };
        if schema_version > SCHEMA_VERSION {
            return Err(InventoryError::UnsupportedSchema {
                found: schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        let materials: Vec<Material> = read_collection(self, MATERIALS_KEY)?;
        let loans: Vec<Loan> = read_collection(self, LOANS_KEY)?;
        tracing::debug!(
            "Loaded {} materials and {} loans",
            materials.len(),
            loans.len()
        );

        Ok(Snapshot {
            schema_version: SCHEMA_VERSION,
            materials,
            loans,
        })
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), InventoryError> {
        let materials =
            serde_json::to_string(&snapshot.materials).map_err(InventoryError::Serialize)?;
        let loans = serde_json::to_string(&snapshot.loans).map_err(InventoryError::Serialize)?;

        self.set_item(VERSION_KEY, &SCHEMA_VERSION.to_string())?;
        self.set_item(MATERIALS_KEY, &materials)?;
        self.set_item(LOANS_KEY, &loans)?;
        Ok(())
    }
}

fn parse_version(raw: &str) -> Result<u32, InventoryError> {
    serde_json::from_str(raw.trim()).map_err(|source| InventoryError::CorruptData {
        key: VERSION_KEY,
        source,
    })
}

fn read_collection<S: Storage, T: DeserializeOwned>(
    storage: &S,
    key: &'static str,
) -> Result<Vec<T>, InventoryError> {
    match storage.get_item(key)? {
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|source| InventoryError::CorruptData { key, source })
        }
        None => Ok(Vec::new()),
    }
}
