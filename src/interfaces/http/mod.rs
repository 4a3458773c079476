//! HTTP-shaped events and responses exchanged with the invocation layer.

pub mod event;
pub mod response;

pub use event::{InitiatorEvent, RequestBody, StatusEvent};
pub use response::{ApiResponse, TransactionView};
