use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{TransactionId, TransactionRecord};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory transactions table.
///
/// Uses `Arc<RwLock<HashMap<TransactionId, TransactionRecord>>>` so clones share
/// the same table. Contents live only as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    records: Arc<RwLock<HashMap<TransactionId, TransactionRecord>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transactions table.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn put(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.transaction_id.clone(), record);
        Ok(())
    }

    async fn get(&self, transaction_id: &TransactionId) -> Result<Option<TransactionRecord>> {
        let records = self.records.read().await;
        Ok(records.get(transaction_id).cloned())
    }
}
