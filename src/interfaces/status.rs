use crate::application::ledger::Ledger;
use crate::domain::transfer::TransferRequest;
use crate::error::LedgerError;
use std::fmt;

/// Request-level outcome of a transfer, expressed as an HTTP-style status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransferStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalError,
}

impl TransferStatus {
    pub fn code(&self) -> u16 {
        match self {
            TransferStatus::Ok => 200,
            TransferStatus::BadRequest => 400,
            TransferStatus::NotFound => 404,
            TransferStatus::InternalError => 500,
        }
    }

    pub fn from_error(error: &LedgerError) -> Self {
        match error {
            LedgerError::InvalidTransfer(_) | LedgerError::InvalidArgument(_) => {
                TransferStatus::BadRequest
            }
            LedgerError::AccountNotFound(_) => TransferStatus::NotFound,
            _ => TransferStatus::InternalError,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Handles one transfer request the way a request endpoint would: both ids
/// are resolved first and an unknown id answers 404 without touching the
/// ledger's transfer path.
pub fn handle_transfer(
    ledger: &Ledger,
    request: &TransferRequest,
) -> (TransferStatus, Option<LedgerError>) {
    for key in [request.source, request.target].into_iter().flatten() {
        if ledger.get_account(key.id()).is_none() {
            return (
                TransferStatus::NotFound,
                Some(LedgerError::AccountNotFound(key)),
            );
        }
    }

    match ledger.transfer(request) {
        Ok(()) => (TransferStatus::Ok, None),
        Err(e) => (TransferStatus::from_error(&e), Some(e)),
    }
}
