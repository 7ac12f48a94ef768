use thiserror::Error;

use crate::core::transaction::Amount;

/// Reasons a ledger refuses to record a transaction.
/// These are reported back to the caller; the ledger stays unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidTransaction {
    /// Occurs when the amount is zero, negative or not a finite number.
    #[error("invalid transaction amount: {0}")]
    InvalidAmount(Amount),
    /// Occurs when the category label is empty or only whitespace.
    #[error("transaction category must not be empty")]
    EmptyCategory,
}

pub type TransactionResult<T> = Result<T, InvalidTransaction>;

/// A stored mapping that does not describe a transaction: a key is missing,
/// an unexpected key is present, or a value has the wrong shape.
#[derive(Debug, Error)]
#[error("malformed transaction record: {0}")]
pub struct MalformedRecord(#[from] serde_json::Error);
