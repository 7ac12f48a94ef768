use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use serde::Serialize;

use crate::core::transaction::{Amount, Transaction};

/// Turns a ledger's transactions into some summary.
pub trait ReportGenerator {
    type Report;
    fn generate(&self, transactions: &[Transaction]) -> Self::Report;
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub total: Amount,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CategoryReport {
    pub categories: Vec<CategoryTotal>,
    pub total: Amount,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Totals per category, in the order categories first appear.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategorySummary;

impl ReportGenerator for CategorySummary {
    type Report = CategoryReport;

    fn generate(&self, transactions: &[Transaction]) -> CategoryReport {
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for transaction in transactions {
            match categories.iter_mut().find(|row| row.category == transaction.category) {
                Some(row) => {
                    row.count += 1;
                    row.total += transaction.amount;
                },
                None => categories.push(CategoryTotal {
                    category: transaction.category.clone(),
                    count: 1,
                    total: transaction.amount,
                }),
            }
        }

        CategoryReport {
            total: categories.iter().map(|row| row.total).sum(),
            first_date: transactions.iter().map(|t| t.date).min(),
            last_date: transactions.iter().map(|t| t.date).max(),
            categories,
        }
    }
}

impl std::fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(first), Some(last)) = (self.first_date, self.last_date) {
            writeln!(f, "{} {} to {}", "Period:".bold(), first, last)?;
        }
        for row in &self.categories {
            writeln!(f, "{:<20} {:>4} {:>12.2}", row.category, row.count, row.total)?;
        }
        write!(f, "{:<20} {:>4} {:>12.2}", "Total".bold(), "", self.total)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
    pub total: Amount,
}

/// Totals per calendar month, oldest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonthlySummary;

impl ReportGenerator for MonthlySummary {
    type Report = Vec<MonthTotal>;

    fn generate(&self, transactions: &[Transaction]) -> Vec<MonthTotal> {
        let mut months: BTreeMap<(i32, u32), (usize, Amount)> = BTreeMap::new();
        for transaction in transactions {
            let key = (transaction.date.year(), transaction.date.month());
            let entry = months.entry(key).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += transaction.amount;
        }

        months.into_iter()
            .map(|((year, month), (count, total))| MonthTotal {
                month: format!("{:04}-{:02}", year, month),
                count,
                total,
            })
            .collect()
    }
}

impl std::fmt::Display for MonthTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:>4} {:>12.2}", self.month.bold(), self.count, self.total)
    }
}
