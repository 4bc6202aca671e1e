//! Request layer: CSV input and output, and the mapping from ledger
//! outcomes to request statuses.

pub mod batch;
pub mod csv;
pub mod status;
