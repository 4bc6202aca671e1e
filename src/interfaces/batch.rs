use super::status::{TransferStatus, handle_transfer};
use crate::application::ledger::Ledger;
use crate::domain::account::NewAccount;
use crate::domain::transfer::TransferRequest;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::thread;
use tracing::{debug, warn};

/// Tally of request statuses produced by a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    counts: BTreeMap<TransferStatus, usize>,
}

impl BatchSummary {
    pub fn record(&mut self, status: TransferStatus) {
        *self.counts.entry(status).or_default() += 1;
    }

    pub fn count(&self, status: TransferStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn merge(&mut self, other: BatchSummary) {
        for (status, n) in other.counts {
            *self.counts.entry(status).or_default() += n;
        }
    }
}

/// Creates every account, logging and skipping the ones the ledger rejects.
/// Returns the number of accounts created.
pub fn seed_accounts(ledger: &Ledger, accounts: impl IntoIterator<Item = NewAccount>) -> usize {
    let mut created = 0;
    for account in accounts {
        match ledger.create_account(account) {
            Ok(_) => created += 1,
            Err(e) => warn!(error = %e, "skipping account"),
        }
    }
    created
}

/// Runs the transfers on `workers` threads.
///
/// Requests are dealt round-robin, so with a single worker they are applied
/// in input order.
pub fn run_transfers(
    ledger: &Ledger,
    transfers: &[TransferRequest],
    workers: NonZeroUsize,
) -> BatchSummary {
    let workers = workers.get();

    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                s.spawn(move || {
                    let mut summary = BatchSummary::default();
                    for request in transfers.iter().skip(worker).step_by(workers) {
                        let (status, error) = handle_transfer(ledger, request);
                        match error {
                            Some(e) => {
                                warn!(worker, status = %status, error = %e, "transfer rejected")
                            }
                            None => debug!(worker, "transfer applied"),
                        }
                        summary.record(status);
                    }
                    summary
                })
            })
            .collect();

        handles
            .into_iter()
            .fold(BatchSummary::default(), |mut acc, handle| {
                match handle.join() {
                    Ok(summary) => acc.merge(summary),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
                acc
            })
    })
}
