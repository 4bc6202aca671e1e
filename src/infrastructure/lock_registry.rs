use crate::domain::account::AccountKey;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

pub type AccountLock = Arc<Mutex<()>>;

/// Per-account mutexes, created on first use and kept afterwards.
///
/// Provisioning goes through the map's entry API, so concurrent first
/// references to the same key all end up with the same mutex.
///
/// The registry only grows, even across a ledger `clear`: dropping a mutex
/// while a transfer holds it would let a second transfer on the same key
/// proceed against a fresh one. Heavy account churn would need eviction,
/// which is not implemented.
#[derive(Default)]
pub struct LockRegistry {
    locks: DashMap<AccountKey, AccountLock>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for `key`, creating it if absent.
    pub fn lock_for(&self, key: AccountKey) -> AccountLock {
        // Clone out of the entry so the shard guard is released before the
        // caller blocks on the mutex.
        self.locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Returns the locks for both keys, lower key first.
    pub fn ordered_pair(&self, a: AccountKey, b: AccountKey) -> (AccountLock, AccountLock) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        (self.lock_for(low), self.lock_for(high))
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
