pub mod error;
pub mod transaction;
pub mod ledger;
pub mod report;

pub use error::{InvalidTransaction, MalformedRecord, TransactionResult};
pub use transaction::{Amount, Transaction};
pub use ledger::Ledger;
pub use report::{CategorySummary, MonthlySummary, ReportGenerator};
