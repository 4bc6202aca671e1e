use super::account::{Account, AccountKey, Amount};
use crate::error::{LedgerError, Result, TransferRejection};
use rust_decimal::Decimal;
use serde::Deserialize;

/// An unvalidated request to move funds between two accounts.
///
/// Endpoints and amount are optional so a request layer can hand over
/// whatever it parsed; `validate` decides whether the request is usable.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy, Default)]
pub struct TransferRequest {
    #[serde(rename = "source_id")]
    pub source: Option<AccountKey>,
    #[serde(rename = "target_id")]
    pub target: Option<AccountKey>,
    pub amount: Option<Decimal>,
}

/// A transfer that passed every check that can be made without locks.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ValidTransfer {
    pub source: AccountKey,
    pub target: AccountKey,
    pub amount: Amount,
}

impl TransferRequest {
    pub fn new(source: AccountKey, target: AccountKey, amount: Decimal) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            amount: Some(amount),
        }
    }

    /// Builds a request from account views. Only the keys are kept; the
    /// coordinator re-resolves both accounts under lock.
    pub fn between(source: &Account, target: &Account, amount: Decimal) -> Self {
        Self::new(source.key, target.key, amount)
    }

    /// Checks, in order: both endpoints present, endpoints distinct,
    /// amount positive, amount at cent granularity.
    pub fn validate(&self) -> Result<ValidTransfer> {
        let (Some(source), Some(target)) = (self.source, self.target) else {
            return Err(LedgerError::InvalidTransfer(
                TransferRejection::MissingAccount,
            ));
        };

        if source == target {
            return Err(LedgerError::InvalidTransfer(TransferRejection::SameAccount));
        }

        let amount = self.amount.ok_or(LedgerError::InvalidTransfer(
            TransferRejection::NonPositiveAmount,
        ))?;

        Ok(ValidTransfer {
            source,
            target,
            amount: Amount::new(amount)?,
        })
    }
}
