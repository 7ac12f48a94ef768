use chrono::NaiveDate;

use crate::backend::{self, JsonStore, LedgerStore};
use crate::core::error::{InvalidTransaction, TransactionResult};
use crate::core::report::ReportGenerator;
use crate::core::transaction::{Amount, Transaction};

/// Transactions in the order they were added, plus the store they are
/// saved to and loaded from.
pub struct Ledger<S: LedgerStore = JsonStore> {
    transactions: Vec<Transaction>,
    store: S,
}

impl Ledger<JsonStore> {
    /// An empty ledger kept in `transactions.json`.
    pub fn new() -> Ledger {
        Ledger::with_store(JsonStore::default())
    }
}

impl Default for Ledger<JsonStore> {
    fn default() -> Self {
        Ledger::new()
    }
}

impl<S: LedgerStore> Ledger<S> {
    pub fn with_store(store: S) -> Ledger<S> {
        Ledger { transactions: Vec::new(), store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, amount: Amount, date: NaiveDate, category: &str) -> TransactionResult<()> {
        let checked = Self::check(amount, category);
        match &checked {
            Ok(()) => {
                self.transactions.push(Transaction::new(amount, date, category));
                log::info!("transaction added: {} {} {}", date, category, amount);
            },
            Err(err) => log::warn!("transaction rejected: {}", err),
        }
        checked
    }

    /// Take back the most recently added transaction, e.g. when it could
    /// not be persisted.
    pub fn discard_last(&mut self) -> Option<Transaction> {
        let discarded = self.transactions.pop();
        if let Some(transaction) = &discarded {
            log::info!("transaction discarded: {} {} {}", transaction.date, transaction.category, transaction.amount);
        }
        discarded
    }

    fn check(amount: Amount, category: &str) -> TransactionResult<()> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(InvalidTransaction::InvalidAmount(amount));
        }
        if category.trim().is_empty() {
            return Err(InvalidTransaction::EmptyCategory);
        }
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions whose category is exactly `category`, case included.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Transactions dated within `from..=to`; either bound may be left open.
    pub fn filter_by_date_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|t| t.dated_within(from, to))
            .collect()
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for transaction in &self.transactions {
            if !seen.contains(&transaction.category.as_str()) {
                seen.push(&transaction.category);
            }
        }
        seen
    }

    pub fn total(&self) -> Amount {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    pub fn generate_report<G: ReportGenerator>(&self, generator: &G) -> G::Report {
        generator.generate(&self.transactions)
    }

    pub fn save(&self) -> backend::Result<()> {
        self.store.write(&self.transactions)
    }

    /// Replace the in-memory transactions with the stored ones.
    /// On error the current transactions are kept as they were.
    pub fn load(&mut self) -> backend::Result<()> {
        self.transactions = self.store.read()?;
        log::info!("loaded {} transactions", self.transactions.len());
        Ok(())
    }
}
