//! Storage adapters for the transactions table.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

use crate::config::StoreConfig;
use crate::domain::ports::SharedTransactionStore;
use crate::error::Result;
use in_memory::InMemoryTransactionStore;
use std::sync::Arc;
use tracing::info;

/// Builds the store handle that every handler in this process shares.
///
/// Uses RocksDB when a database path is configured and the `storage-rocksdb`
/// feature is enabled, in-memory storage otherwise.
pub fn open_store(config: &StoreConfig) -> Result<SharedTransactionStore> {
    match &config.db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = self::rocksdb::RocksDBStore::open(path, &config.transactions_table)?;
            info!(
                "Opened table {} in RocksDB at {}",
                config.transactions_table,
                path.display()
            );
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(in_memory_store(config))
        }
        None => Ok(in_memory_store(config)),
    }
}

fn in_memory_store(config: &StoreConfig) -> SharedTransactionStore {
    info!("Using in-memory table {}", config.transactions_table);
    Arc::new(InMemoryTransactionStore::new())
}
