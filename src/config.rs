use std::{fs, path::{Path, PathBuf}};

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};
use toml;

use crate::backend::{JsonStore, DEFAULT_PATH};
use crate::core::Ledger;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// JSON file holding the transactions
    pub data_file: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig { data_file: PathBuf::from(DEFAULT_PATH) }
    }
}

impl TrackerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let file_content = fs::read_to_string(filepath)
            .with_context(|| format!("failed to read config file {}", filepath.display()))?;
        let config = toml::from_str(&file_content)
            .with_context(|| format!("failed to parse config file {}", filepath.display()))?;
        return Ok(config);
    }

    /// An empty ledger backed by the configured data file.
    pub fn ledger(&self) -> Ledger {
        Ledger::with_store(JsonStore::new(&self.data_file))
    }
}


#[cfg(test)]
mod tests {
    use super::TrackerConfig;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_transactions_json() {
        let config: TrackerConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_file, PathBuf::from("transactions.json"));
    }

    #[test]
    fn reads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "data_file = \"/tmp/ledger.json\"\n").unwrap();

        let config = TrackerConfig::read(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/ledger.json"));
        assert_eq!(config.ledger().store().path(), config.data_file.as_path());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<TrackerConfig>("data_fil = \"x.json\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TrackerConfig::read(dir.path().join("nope.toml")).is_err());
    }
}
