use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

use finance_tracker::config::TrackerConfig;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Address to bind, `host:port`
    pub listen: String,
    pub tracker: TrackerConfig
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { listen: "127.0.0.1:3000".to_owned(), tracker: TrackerConfig::default() }
    }
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let file_content = fs::read_to_string(filepath)
            .with_context(|| format!("failed to read server config {}", filepath.display()))?;
        let config: AppConfig = toml::from_str(&file_content)
            .with_context(|| format!("failed to parse server config {}", filepath.display()))?;
        log::debug!("server config from {}: listen on {}", filepath.display(), config.listen);
        Ok(config)
    }
}


#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert_eq!(config.tracker.data_file, PathBuf::from("transactions.json"));
    }

    #[test]
    fn read_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "listen = 3000\n").unwrap();

        let err = AppConfig::read(&path).unwrap_err();
        assert!(err.to_string().contains("server.toml"));
    }

    #[test]
    fn nested_tracker_table() {
        let config: AppConfig = toml::from_str(
            "listen = \"0.0.0.0:8080\"\n[tracker]\ndata_file = \"/srv/ledger.json\"\n"
        ).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
        assert_eq!(config.tracker.data_file, PathBuf::from("/srv/ledger.json"));
    }
}
