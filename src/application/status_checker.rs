use crate::domain::ports::SharedTransactionStore;
use crate::error::Result;
use crate::interfaces::http::response::{STATUS_BAD_REQUEST, STATUS_NOT_FOUND, STATUS_OK};
use crate::interfaces::http::{ApiResponse, StatusEvent, TransactionView};
use tracing::debug;

/// Read-through lookup of a transaction's current status.
pub struct StatusChecker {
    store: SharedTransactionStore,
}

impl StatusChecker {
    pub fn new(store: SharedTransactionStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, event: StatusEvent) -> Result<ApiResponse> {
        let Some(transaction_id) = event.transaction_id() else {
            return ApiResponse::message(STATUS_BAD_REQUEST, "transaction_id required");
        };

        let Some(record) = self.store.get(&transaction_id).await? else {
            debug!("Transaction {} not found", transaction_id);
            return ApiResponse::message(STATUS_NOT_FOUND, "not found");
        };

        ApiResponse::json(
            STATUS_OK,
            &TransactionView {
                transaction_id: record.transaction_id,
                status: record.status,
            },
        )
    }
}
