pub mod core;
pub mod backend;
pub mod auth;
pub mod config;
pub mod logging;

pub use crate::core::{Ledger, Transaction, Amount};
pub use crate::core::{ledger, transaction, report};
pub use crate::backend::{JsonStore, LedgerStore};
