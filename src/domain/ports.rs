use super::transaction::{TransactionId, TransactionRecord};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The key-value table holding transaction records, keyed by `transaction_id`.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn put(&self, record: TransactionRecord) -> Result<()>;
    async fn get(&self, transaction_id: &TransactionId) -> Result<Option<TransactionRecord>>;
}

/// A store handle shared by every handler in the process.
pub type SharedTransactionStore = Arc<dyn TransactionStore>;
