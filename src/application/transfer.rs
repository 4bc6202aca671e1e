use crate::domain::account::{Account, AccountKey, Balance};
use crate::domain::ports::AccountStore;
use crate::domain::transfer::{TransferRequest, ValidTransfer};
use crate::error::{LedgerError, Result};
use crate::infrastructure::lock_registry::LockRegistry;
use tracing::{debug, info};

/// Moves funds between two accounts with all-or-nothing semantics.
///
/// Every transfer takes the locks of both accounts in ascending key order,
/// whatever its direction, so two transfers over the same pair can never
/// wait on each other in a cycle. Transfers over disjoint pairs share no
/// lock and run in parallel.
#[derive(Default)]
pub struct TransferCoordinator {
    locks: LockRegistry,
}

impl TransferCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `request` and applies it to `store`.
    ///
    /// Blocks until both account locks are available.
    pub fn transfer(&self, store: &dyn AccountStore, request: &TransferRequest) -> Result<()> {
        let transfer = request.validate()?;

        let (low, high) = self.locks.ordered_pair(transfer.source, transfer.target);
        // Guards drop in reverse order: higher key released first.
        let _low_guard = low.lock();
        let _high_guard = high.lock();
        debug!(
            source = %transfer.source,
            target = %transfer.target,
            "acquired transfer locks"
        );

        self.apply(store, &transfer)?;

        info!(
            source = %transfer.source,
            target = %transfer.target,
            amount = %transfer.amount.value(),
            "transfer completed"
        );
        Ok(())
    }

    /// Re-reads both accounts and rewrites their balances. Callers must hold
    /// both locks.
    fn apply(&self, store: &dyn AccountStore, transfer: &ValidTransfer) -> Result<()> {
        let amount = Balance::from(transfer.amount);

        let source = store
            .get(transfer.source)
            .ok_or(LedgerError::AccountNotFound(transfer.source))?;
        if source.balance < amount {
            return Err(LedgerError::InsufficientBalance(transfer.source));
        }

        let target = store
            .get(transfer.target)
            .ok_or(LedgerError::AccountNotFound(transfer.target))?;

        // Both results are computed before either write
        let debited = source
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance(source.key))?;
        let credited = target
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(target.key))?;

        store.set_balance(source.key, debited)?;
        store.set_balance(target.key, credited)?;
        Ok(())
    }

    /// Returns every account, sorted by key, read while holding all of their
    /// locks.
    ///
    /// Locks are taken in ascending key order, the same order transfers use,
    /// so no transfer can be half applied in the result. Accounts created
    /// after the key listing are left out.
    pub fn snapshot(&self, store: &dyn AccountStore) -> Vec<Account> {
        let mut keys: Vec<AccountKey> = store
            .all_accounts()
            .into_iter()
            .map(|account| account.key)
            .collect();
        keys.sort();

        let locks: Vec<_> = keys.iter().map(|key| self.locks.lock_for(*key)).collect();
        let _guards: Vec<_> = locks.iter().map(|lock| lock.lock()).collect();

        let accounts: Vec<Account> = keys.iter().filter_map(|key| store.get(*key)).collect();
        accounts
    }

    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}
