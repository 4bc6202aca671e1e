use super::account::{Account, AccountKey, Balance};
use crate::error::Result;

/// Storage port for ledger accounts.
///
/// Implementations must be safe to share across threads. Lookups and
/// insertions must never block on the transfer coordinator's locks.
pub trait AccountStore: Send + Sync {
    /// Removes every account.
    fn clear(&self);
    /// Inserts the account unless its key is already taken, atomically.
    fn insert_new(&self, account: Account) -> Result<()>;
    /// Returns a snapshot of the account, if present.
    fn get(&self, key: AccountKey) -> Option<Account>;
    /// Overwrites the balance of an existing account.
    ///
    /// Only the transfer coordinator calls this, while holding the locks of
    /// both accounts involved.
    fn set_balance(&self, key: AccountKey, balance: Balance) -> Result<()>;
    fn all_accounts(&self) -> Vec<Account>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type AccountStoreFactory = Box<dyn Fn() -> AccountStoreBox + Send + Sync>;
