use crate::domain::account::{Account, AccountKey, Balance};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// A thread-safe in-memory store for ledger accounts.
///
/// Backed by a sharded `DashMap`, so lookups and insertions only contend on
/// the shard holding the key and never on transfer locks.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<DashMap<AccountKey, Account>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn clear(&self) {
        self.accounts.clear();
    }

    fn insert_new(&self, account: Account) -> Result<()> {
        // The entry guard holds the shard lock, so check and insert are one step
        match self.accounts.entry(account.key) {
            Entry::Occupied(entry) => Err(LedgerError::AlreadyExists(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    fn get(&self, key: AccountKey) -> Option<Account> {
        self.accounts.get(&key).map(|entry| entry.value().clone())
    }

    fn set_balance(&self, key: AccountKey, balance: Balance) -> Result<()> {
        let mut entry = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;
        entry.balance = balance;
        Ok(())
    }

    fn all_accounts(&self) -> Vec<Account> {
        self.accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
