use chrono::NaiveDate;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::error::MalformedRecord;

pub type Amount = f64;

/// One recorded financial event.
///
/// Construction performs no checks; it is the ledger that refuses
/// non-positive amounts when a transaction is added.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    pub amount: Amount,
    pub date: NaiveDate,
    pub category: String,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}: {:.2}", self.date, self.category.bold(), self.amount)
    }
}

impl Transaction {
    pub fn new(amount: Amount, date: NaiveDate, category: &str) -> Transaction {
        Transaction {
            amount,
            date,
            category: category.to_owned(),
        }
    }

    /// Whether the date falls within `from..=to`; a missing bound is open.
    pub fn dated_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |from| self.date >= from) && to.map_or(true, |to| self.date <= to)
    }

    /// Key-value form with exactly the `amount`, `date` and `category` keys.
    pub fn to_record(&self) -> serde_json::Value {
        serde_json::json!({
            "amount": self.amount,
            "date": self.date,
            "category": self.category,
        })
    }

    pub fn from_record(record: serde_json::Value) -> Result<Transaction, MalformedRecord> {
        if !record.is_object() {
            let err = <serde_json::Error as serde::de::Error>::custom("expected a mapping");
            return Err(MalformedRecord::from(err));
        }
        Ok(serde_json::from_value(record)?)
    }
}
