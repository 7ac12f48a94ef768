use std::path::PathBuf;

use thiserror::Error;

use crate::core::{MalformedRecord, Transaction};

#[derive(Debug, Error)]
pub enum BackendError {
    /// The ledger file exists but could not be read, or could not be written.
    #[error("cannot access ledger file {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The ledger file is not a JSON array.
    #[error("cannot parse ledger file {}: {source}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// One of the stored records is not a transaction.
    #[error("record {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: MalformedRecord,
    },
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Somewhere a ledger's transactions are kept between runs.
pub trait LedgerStore {
    /// Transactions in stored order. An absent store reads as empty.
    fn read(&self) -> Result<Vec<Transaction>>;
    /// Replace everything stored with `transactions`.
    fn write(&self, transactions: &[Transaction]) -> Result<()>;
}
