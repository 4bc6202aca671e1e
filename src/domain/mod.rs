//! Domain layer: ledger value objects, request types and the storage port.

pub mod account;
pub mod ports;
pub mod transfer;
