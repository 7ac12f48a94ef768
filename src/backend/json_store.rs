use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backend::interface::{BackendError, LedgerStore, Result};
use crate::core::Transaction;

/// Where transactions live when nothing else is configured.
pub const DEFAULT_PATH: &str = "transactions.json";

/// Keeps transactions as a JSON array of `{amount, date, category}` objects.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl Default for JsonStore {
    fn default() -> Self {
        JsonStore::new(DEFAULT_PATH)
    }
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_failure(&self, source: io::Error) -> BackendError {
        BackendError::IoFailure { path: self.path.clone(), source }
    }
}

impl LedgerStore for JsonStore {
    fn read(&self) -> Result<Vec<Transaction>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no ledger file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            },
            Err(err) => return Err(self.io_failure(err)),
        };

        let records: Vec<serde_json::Value> = serde_json::from_str(&content)
            .map_err(|source| BackendError::ParseFailure { path: self.path.clone(), source })?;

        let transactions = records.into_iter()
            .enumerate()
            .map(|(index, record)| Transaction::from_record(record)
                .map_err(|source| BackendError::MalformedRecord { index, source }))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("read {} transactions from {}", transactions.len(), self.path.display());
        Ok(transactions)
    }

    fn write(&self, transactions: &[Transaction]) -> Result<()> {
        let records: Vec<serde_json::Value> = transactions.iter()
            .map(Transaction::to_record)
            .collect();

        let file = fs::File::create(&self.path).map_err(|err| self.io_failure(err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &records)
            .map_err(|err| self.io_failure(err.into()))?;
        writer.flush().map_err(|err| self.io_failure(err))?;

        log::debug!("wrote {} transactions to {}", transactions.len(), self.path.display());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::{BackendError, JsonStore, LedgerStore};
    use crate::core::Transaction;

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use tempfile::TempDir;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[fixture]
    fn transactions() -> Vec<Transaction> {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        vec![
            Transaction::new(1000.0, day(1), "Salary"),
            Transaction::new(42.5, day(3), "Groceries"),
            Transaction::new(42.5, day(3), "Groceries"),
        ]
    }

    #[rstest]
    fn missing_file_reads_empty(dir: TempDir) {
        let store = JsonStore::new(dir.path().join("absent.json"));
        assert!(store.read().unwrap().is_empty());
    }

    #[rstest]
    fn write_then_read(dir: TempDir, transactions: Vec<Transaction>) {
        let store = JsonStore::new(dir.path().join("ledger.json"));
        store.write(&transactions).unwrap();
        assert_eq!(store.read().unwrap(), transactions);
    }

    #[rstest]
    fn written_file_is_array_of_records(dir: TempDir, transactions: Vec<Transaction>) {
        let store = JsonStore::new(dir.path().join("ledger.json"));
        store.write(&transactions[..2]).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, json!([
            {"amount": 1000.0, "date": "2024-01-01", "category": "Salary"},
            {"amount": 42.5, "date": "2024-01-03", "category": "Groceries"},
        ]));
    }

    #[rstest]
    fn write_overwrites(dir: TempDir, transactions: Vec<Transaction>) {
        let store = JsonStore::new(dir.path().join("ledger.json"));
        store.write(&transactions).unwrap();
        store.write(&transactions[..1]).unwrap();
        assert_eq!(store.read().unwrap(), transactions[..1].to_vec());
    }

    #[rstest]
    #[case::not_json("this is not json")]
    #[case::not_an_array(r#"{"amount": 1.0, "date": "2024-01-01", "category": "Salary"}"#)]
    fn unparseable_file(dir: TempDir, #[case] content: &str) {
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, content).unwrap();

        let res = JsonStore::new(&path).read();
        assert!(matches!(res, Err(BackendError::ParseFailure { .. })));
    }

    #[rstest]
    fn malformed_record_reports_index(dir: TempDir) {
        let path = dir.path().join("ledger.json");
        let content = json!([
            {"amount": 1.0, "date": "2024-01-01", "category": "Salary"},
            {"amount": 2.0, "date": "2024-01-02"},
        ]);
        std::fs::write(&path, content.to_string()).unwrap();

        let res = JsonStore::new(&path).read();
        assert!(matches!(res, Err(BackendError::MalformedRecord { index: 1, .. })));
    }

    #[rstest]
    fn unwritable_location(dir: TempDir, transactions: Vec<Transaction>) {
        let store = JsonStore::new(dir.path().join("no-such-dir").join("ledger.json"));
        let res = store.write(&transactions);
        assert!(matches!(res, Err(BackendError::IoFailure { .. })));
    }
}
