pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod platform;
pub mod snapshot;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::InventoryConfig;
pub use error::{InventoryError, StorageError};
pub use inventory::{Inventory, LoanRequest};
pub use models::{CurrentLoan, Loan, Material};
pub use snapshot::{Persistence, Snapshot};
pub use storage::Storage;
