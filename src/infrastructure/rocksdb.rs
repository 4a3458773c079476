use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{TransactionId, TransactionRecord};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// A persistent transactions table backed by RocksDB.
///
/// Each table name maps to its own column family, so several tables can share
/// one database directory. Records are stored as JSON keyed by the UTF-8 bytes
/// of their `transaction_id`.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    table: String,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, ensuring the column family
    /// for `table` exists.
    pub fn open<P: AsRef<Path>>(path: P, table: &str) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        // Column families already on disk must be opened too.
        let mut names = DB::list_cf(&opts, path.as_ref()).unwrap_or_default();
        if !names.iter().any(|name| name == table) {
            names.push(table.to_string());
        }
        let descriptors = names
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()));

        let db = DB::open_cf_descriptors(&opts, path, descriptors)?;

        Ok(Self {
            db: Arc::new(db),
            table: table.to_string(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn column_family(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(&self.table).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(format!(
                "Column family for table {} not found",
                self.table
            ))))
        })
    }
}

#[async_trait]
impl TransactionStore for RocksDBStore {
    async fn put(&self, record: TransactionRecord) -> Result<()> {
        let cf = self.column_family()?;
        let value = serde_json::to_vec(&record)?;
        self.db
            .put_cf(cf, record.transaction_id.as_str().as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, transaction_id: &TransactionId) -> Result<Option<TransactionRecord>> {
        let cf = self.column_family()?;
        match self.db.get_pinned_cf(cf, transaction_id.as_str().as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionStatus;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store =
            RocksDBStore::open(dir.path(), "LOCAL-TransactionsTable").expect("Failed to open RocksDB");

        assert!(store.db.cf_handle("LOCAL-TransactionsTable").is_some());
        assert_eq!(store.table(), "LOCAL-TransactionsTable");
    }

    #[tokio::test]
    async fn test_rocksdb_transaction_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path(), "transactions").unwrap();

        let record = TransactionRecord::pending(json!({"amount": 100}));
        store.put(record.clone()).await.unwrap();

        let retrieved = store.get(&record.transaction_id).await.unwrap().unwrap();
        assert_eq!(retrieved, record);
        assert_eq!(retrieved.status, Some(TransactionStatus::Pending));

        assert!(
            store
                .get(&TransactionId::from("missing"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_tables_are_isolated() {
        let dir = tempdir().unwrap();
        let record = TransactionRecord::pending(json!({}));

        {
            let first = RocksDBStore::open(dir.path(), "DEV-TransactionsTable").unwrap();
            first.put(record.clone()).await.unwrap();
        }

        // Reopening with another table keeps the existing column family readable.
        let second = RocksDBStore::open(dir.path(), "PROD-TransactionsTable").unwrap();
        assert!(second.get(&record.transaction_id).await.unwrap().is_none());
        drop(second);

        let first = RocksDBStore::open(dir.path(), "DEV-TransactionsTable").unwrap();
        assert!(first.get(&record.transaction_id).await.unwrap().is_some());
    }
}
