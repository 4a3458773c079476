use crate::domain::ports::SharedTransactionStore;
use crate::domain::transaction::{TransactionRecord, empty_meta};
use crate::error::Result;
use crate::interfaces::http::response::STATUS_OK;
use crate::interfaces::http::{ApiResponse, InitiatorEvent, TransactionView};
use tracing::{debug, info};

/// Creates `pending` transaction records from inbound requests.
pub struct PaymentInitiator {
    store: SharedTransactionStore,
}

impl PaymentInitiator {
    pub fn new(store: SharedTransactionStore) -> Self {
        Self { store }
    }

    /// Persists a new `pending` record carrying the request body as metadata.
    ///
    /// An undecodable body is stored as empty metadata rather than rejected.
    /// Storage failures are returned to the caller.
    pub async fn handle(&self, event: InitiatorEvent) -> Result<ApiResponse> {
        let meta = event.payload().unwrap_or_else(|err| {
            debug!("Request body ignored, storing empty metadata: {}", err);
            empty_meta()
        });

        let record = TransactionRecord::pending(meta);
        let view = TransactionView {
            transaction_id: record.transaction_id.clone(),
            status: record.status.clone(),
        };

        self.store.put(record).await?;
        info!("Transaction {} initiated", view.transaction_id);

        ApiResponse::json(STATUS_OK, &view)
    }
}
