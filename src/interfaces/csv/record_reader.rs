use crate::domain::account::NewAccount;
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads ledger input records from a CSV source.
///
/// This reader wraps `csv::Reader` and handles whitespace trimming and
/// flexible record lengths. Records are deserialized lazily, so large inputs
/// are streamed rather than loaded up front.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Account seeds: `id, first_name, last_name, balance`.
    pub fn accounts(self) -> impl Iterator<Item = Result<NewAccount>> {
        self.records()
    }

    /// Transfer requests: `source_id, target_id, amount`.
    pub fn transfers(self) -> impl Iterator<Item = Result<TransferRequest>> {
        self.records()
    }

    fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
