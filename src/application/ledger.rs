use crate::application::transfer::TransferCoordinator;
use crate::domain::account::{Account, AccountKey, Balance, NewAccount};
use crate::domain::ports::AccountStoreBox;
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use crate::infrastructure::in_memory::InMemoryAccountStore;
use tracing::{info, warn};

/// The main entry point of the ledger.
///
/// `Ledger` owns the account store and the transfer coordinator. All
/// operations take `&self`, so a single instance can be shared between
/// threads (for example behind an `Arc`).
pub struct Ledger {
    store: AccountStoreBox,
    coordinator: TransferCoordinator,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Box::new(InMemoryAccountStore::new()))
    }
}

impl Ledger {
    /// Creates a new `Ledger` on top of the given account store.
    pub fn new(store: AccountStoreBox) -> Self {
        Self {
            store,
            coordinator: TransferCoordinator::new(),
        }
    }

    /// Removes every account. Per-account locks are kept, so a transfer
    /// still in flight keeps its mutual exclusion and then fails with
    /// `AccountNotFound` on the next one.
    pub fn clear(&self) {
        self.store.clear();
        info!("ledger cleared");
    }

    /// Validates and inserts a new account.
    ///
    /// Fails with `InvalidArgument` on malformed data and with
    /// `AlreadyExists` if the key is taken; an existing account is never
    /// modified.
    pub fn create_account(&self, account: NewAccount) -> Result<Account> {
        let inserted = account.validate().and_then(|account| {
            self.store.insert_new(account.clone())?;
            Ok(account)
        });

        match inserted {
            Ok(account) => {
                info!(id = %account.key, balance = %account.balance, "account created");
                Ok(account)
            }
            Err(e) => {
                warn!(error = %e, "account creation rejected");
                Err(e)
            }
        }
    }

    /// Returns a snapshot of the account with the given id, if any.
    pub fn get_account(&self, id: i64) -> Option<Account> {
        self.store.get(AccountKey::new(id))
    }

    /// Moves `request.amount` from the source to the target account.
    pub fn transfer(&self, request: &TransferRequest) -> Result<()> {
        self.coordinator.transfer(&*self.store, request)
    }

    /// Consistent snapshot of all accounts, sorted by key.
    ///
    /// Unlike `get_account` this takes every account lock, so it waits for
    /// in-flight transfers and never shows one half applied.
    pub fn accounts(&self) -> Vec<Account> {
        self.coordinator.snapshot(&*self.store)
    }

    /// Sum of all balances, taken from a consistent snapshot.
    pub fn total_balance(&self) -> Result<Balance> {
        self.accounts()
            .into_iter()
            .try_fold(Balance::ZERO, |total, account| {
                total
                    .checked_add(account.balance)
                    .ok_or(LedgerError::BalanceOverflow(account.key))
            })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
