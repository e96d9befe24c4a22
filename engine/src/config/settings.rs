// Engine settings, loaded from a JSON file or taken from defaults.
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use shared::models::Step;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Bitstamp rejects pages larger than this.
pub const MAX_PAGE_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub pair: String,
    pub step: Step,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: "https://www.bitstamp.net/api/v2".to_string(),
            pair: "btcusd".to_string(),
            step: Step::Minute15,
            limit: MAX_PAGE_LIMIT,
            timeout_secs: 60,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
    pub directory: PathBuf,
    pub preview_rows: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            file_name: "bitcoin_data.csv".to_string(),
            directory: PathBuf::from("."),
            preview_rows: 5,
        }
    }
}

impl ExportSettings {
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub api: ApiSettings,
    pub export: ExportSettings,
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            api: ApiSettings::default(),
            export: ExportSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(raw)
            .map_err(|e| EngineError::ConfigError(format!("Invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let base_url = self.api.base_url.trim();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(EngineError::ConfigError(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.pair.is_empty() || !self.api.pair.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(EngineError::ConfigError(format!(
                "pair must be a non-empty alphanumeric code like 'btcusd', got '{}'",
                self.api.pair
            )));
        }
        if self.api.limit == 0 || self.api.limit > MAX_PAGE_LIMIT {
            return Err(EngineError::ConfigError(format!(
                "limit must be between 1 and {}, got {}",
                MAX_PAGE_LIMIT, self.api.limit
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(EngineError::ConfigError("timeout_secs must be greater than 0".to_string()));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(EngineError::ConfigError("export.file_name must not be empty".to_string()));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(EngineError::ConfigError(format!("Unknown log_level '{}'", self.log_level)));
        }
        Ok(())
    }

    // Falls back to INFO; `validate` already rejects unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_bitstamp() {
        let settings = EngineSettings::default();
        assert_eq!(settings.api.pair, "btcusd");
        assert_eq!(settings.api.step.seconds(), 900);
        assert_eq!(settings.api.limit, 1000);
        assert_eq!(settings.api.timeout(), Duration::from_secs(60));
        assert_eq!(settings.export.file_name, "bitcoin_data.csv");
        assert_eq!(settings.export.preview_rows, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings = EngineSettings::from_json(r#"{ "api": { "step": 3600 }, "log_level": "debug" }"#).unwrap();
        assert_eq!(settings.api.step, Step::Hour1);
        assert_eq!(settings.api.limit, 1000);
        assert_eq!(settings.api.pair, "btcusd");
        assert_eq!(settings.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_unsupported_step_rejected() {
        let result = EngineSettings::from_json(r#"{ "api": { "step": 1000 } }"#);
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        let mut settings = EngineSettings::default();
        settings.api.limit = 1001;
        assert!(settings.validate().is_err());
        settings.api.limit = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut settings = EngineSettings::default();
        settings.api.base_url = "www.bitstamp.net".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_bad_pair_rejected() {
        let mut settings = EngineSettings::default();
        settings.api.pair = "btc/usd".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut settings = EngineSettings::default();
        settings.log_level = "chatty".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "api": {{ "pair": "ethusd", "limit": 500 }}, "export": {{ "preview_rows": 10 }} }}"#).unwrap();
        let settings = EngineSettings::load(file.path()).unwrap();
        assert_eq!(settings.api.pair, "ethusd");
        assert_eq!(settings.api.limit, 500);
        assert_eq!(settings.export.preview_rows, 10);
        assert_eq!(settings.export.output_path(), PathBuf::from("./bitcoin_data.csv"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = EngineSettings::load(Path::new("does_not_exist.json"));
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }
}
