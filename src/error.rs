use crate::domain::account::AccountKey;
use std::fmt;
use thiserror::Error;

/// Why a transfer request was rejected before any lock was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRejection {
    MissingAccount,
    SameAccount,
    NonPositiveAmount,
    ExcessPrecision,
}

impl fmt::Display for TransferRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TransferRejection::MissingAccount => "source and target accounts must not be null",
            TransferRejection::SameAccount => "cannot transfer to the same account",
            TransferRejection::NonPositiveAmount => "transfer amount must be positive",
            TransferRejection::ExcessPrecision => {
                "transfer amount must have at most 2 decimal places"
            }
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid account: {0}")]
    InvalidArgument(String),
    #[error("Account with id {0} already exists")]
    AlreadyExists(AccountKey),
    #[error("Invalid transfer: {0}")]
    InvalidTransfer(TransferRejection),
    #[error("Account with id {0} not found")]
    AccountNotFound(AccountKey),
    #[error("Account with id {0} has insufficient balance for this transaction to occur")]
    InsufficientBalance(AccountKey),
    #[error("Balance of account with id {0} would overflow")]
    BalanceOverflow(AccountKey),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// Only a not-found outcome may succeed after the caller re-resolves the account.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::AccountNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
