//! Application layer containing the ledger operations.
//!
//! `Ledger` is the entry point exposing account creation, lookup, transfers
//! and reset. Transfers are delegated to the `TransferCoordinator`, which
//! serialises conflicting transfers with per-account locks taken in key order.

pub mod ledger;
pub mod transfer;
