//! Application layer containing the two request handlers.
//!
//! `PaymentInitiator` writes new `pending` records and `StatusChecker` reads
//! them back. They never call each other; the only thing they share is the
//! store handle injected through `Dispatcher::new`.

pub mod dispatcher;
pub mod initiator;
pub mod status_checker;
