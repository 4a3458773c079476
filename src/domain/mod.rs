//! Domain types and the storage port the handlers depend on.

pub mod ports;
pub mod transaction;
