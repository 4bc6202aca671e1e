use crate::error::{LedgerError, Result, TransferRejection};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when checking that an amount has at most two decimal places.
const PRECISION_EPSILON: Decimal = dec!(0.001);

/// Unique account identifier.
///
/// Ordering follows the wrapped id and doubles as the global lock order
/// used by the transfer coordinator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountKey(i64);

impl AccountKey {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a monetary value held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal` so balances never drift
/// the way binary floating point would under repeated transfers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// `None` if the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive transfer amount with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO {
            return Err(LedgerError::InvalidTransfer(
                TransferRejection::NonPositiveAmount,
            ));
        }

        let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if (value - cents).abs() > PRECISION_EPSILON {
            return Err(LedgerError::InvalidTransfer(
                TransferRejection::ExcessPrecision,
            ));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

/// A ledger account.
///
/// The key and owner names never change after creation. The balance is only
/// ever rewritten by the transfer coordinator.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    #[serde(rename = "id")]
    pub key: AccountKey,
    pub first_name: String,
    pub last_name: String,
    pub balance: Balance,
}

impl Account {
    pub fn new(
        key: AccountKey,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        balance: Balance,
    ) -> Self {
        Self {
            key,
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance,
        }
    }
}

/// Unvalidated account data as handed over by a request layer.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct NewAccount {
    #[serde(rename = "id")]
    pub key: Option<AccountKey>,
    pub first_name: String,
    pub last_name: String,
    pub balance: Option<Decimal>,
}

impl NewAccount {
    pub fn new(
        key: AccountKey,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            key: Some(key),
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance: Some(balance),
        }
    }

    /// Checks the creation preconditions and produces the account to insert.
    pub fn validate(self) -> Result<Account> {
        let key = self.key.ok_or_else(|| {
            LedgerError::InvalidArgument("account and key required".to_string())
        })?;

        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(LedgerError::InvalidArgument(
                "first and last names must not be empty".to_string(),
            ));
        }

        let balance = match self.balance.map(Balance::new) {
            Some(balance) if !balance.is_negative() => balance,
            _ => {
                return Err(LedgerError::InvalidArgument(
                    "balance must be present and not negative".to_string(),
                ));
            }
        };

        Ok(Account {
            key,
            first_name: self.first_name,
            last_name: self.last_name,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering_follows_id() {
        assert!(AccountKey::new(1) < AccountKey::new(2));
        assert!(AccountKey::new(-5) < AccountKey::new(0));
        assert_eq!(AccountKey::new(3), AccountKey::new(3));
    }

    #[test]
    fn test_balance_arithmetic() {
        let b1 = Balance::new(dec!(10.0));
        let b2 = Balance::new(dec!(5.0));
        assert_eq!(b1.checked_add(b2), Some(Balance::new(dec!(15.0))));
        assert_eq!(b1.checked_sub(b2), Some(Balance::new(dec!(5.0))));
    }

    #[test]
    fn test_balance_overflow_is_reported() {
        let full = Balance::new(Decimal::MAX);
        assert_eq!(full.checked_add(Balance::new(dec!(1))), None);
        assert_eq!(
            Balance::new(Decimal::MIN).checked_sub(Balance::new(dec!(1))),
            None
        );
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0.01)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(LedgerError::InvalidTransfer(TransferRejection::NonPositiveAmount))
        ));
        assert!(matches!(
            Amount::new(dec!(-5)),
            Err(LedgerError::InvalidTransfer(TransferRejection::NonPositiveAmount))
        ));
        assert!(matches!(
            Amount::new(dec!(20.555)),
            Err(LedgerError::InvalidTransfer(TransferRejection::ExcessPrecision))
        ));
    }

    #[test]
    fn test_amount_within_epsilon_is_accepted() {
        // 10.0005 rounds to 10.00, a difference of 0.0005
        assert!(Amount::new(dec!(10.0005)).is_ok());
        assert!(Amount::new(dec!(10.0015)).is_err());
    }

    #[test]
    fn test_new_account_validation() {
        let ok = NewAccount::new(AccountKey::new(1), "Pesho", "P", dec!(100));
        let account = ok.validate().unwrap();
        assert_eq!(account.key, AccountKey::new(1));
        assert_eq!(account.first_name, "Pesho");
        assert_eq!(account.last_name, "P");
        assert_eq!(account.balance, Balance::new(dec!(100)));

        let missing_key = NewAccount {
            key: None,
            ..NewAccount::new(AccountKey::new(1), "Pesho", "P", dec!(1))
        };
        assert!(matches!(
            missing_key.validate(),
            Err(LedgerError::InvalidArgument(_))
        ));

        let empty_first = NewAccount::new(AccountKey::new(1), "", "J", dec!(300));
        assert!(matches!(
            empty_first.validate(),
            Err(LedgerError::InvalidArgument(_))
        ));

        let empty_last = NewAccount::new(AccountKey::new(1), "Misho", "", dec!(200));
        assert!(matches!(
            empty_last.validate(),
            Err(LedgerError::InvalidArgument(_))
        ));

        let negative = NewAccount::new(AccountKey::new(1), "Misho", "M", dec!(-15));
        assert!(matches!(
            negative.validate(),
            Err(LedgerError::InvalidArgument(_))
        ));

        let missing_balance = NewAccount {
            balance: None,
            ..NewAccount::new(AccountKey::new(1), "Misho", "M", dec!(0))
        };
        assert!(matches!(
            missing_balance.validate(),
            Err(LedgerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_opening_balance_is_valid() {
        let account = NewAccount::new(AccountKey::new(2), "Gosho", "G", dec!(0))
            .validate()
            .unwrap();
        assert_eq!(account.balance, Balance::ZERO);
    }

    #[test]
    fn test_account_serialization() {
        let account = Account::new(AccountKey::new(4), "Joro", "J", Balance::new(dec!(12.5)));
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(
            json,
            r#"{"id":4,"first_name":"Joro","last_name":"J","balance":"12.5"}"#
        );
    }
}
