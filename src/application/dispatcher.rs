use super::initiator::PaymentInitiator;
use super::status_checker::StatusChecker;
use crate::domain::ports::SharedTransactionStore;
use crate::error::Result;
use crate::interfaces::http::ApiResponse;
use crate::interfaces::ndjson::Invocation;

/// Owns both handlers, wired to the same injected store.
pub struct Dispatcher {
    initiator: PaymentInitiator,
    status_checker: StatusChecker,
}

impl Dispatcher {
    pub fn new(store: SharedTransactionStore) -> Self {
        Self {
            initiator: PaymentInitiator::new(store.clone()),
            status_checker: StatusChecker::new(store),
        }
    }

    pub fn initiator(&self) -> &PaymentInitiator {
        &self.initiator
    }

    pub fn status_checker(&self) -> &StatusChecker {
        &self.status_checker
    }

    /// Routes one invocation to the handler it names.
    pub async fn dispatch(&self, invocation: Invocation) -> Result<ApiResponse> {
        match invocation {
            Invocation::Initiate(event) => self.initiator.handle(event).await,
            Invocation::Status(event) => self.status_checker.handle(event).await,
        }
    }
}
