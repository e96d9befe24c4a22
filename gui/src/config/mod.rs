// GUI configuration module
pub mod theme;

// Mirrors assets/config/default.json. The `engine` section is handed to the
// engine crate unchanged.
use anyhow::{anyhow, Context, Result};
use engine::config::EngineSettings;
use engine::services::FetchForm;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub window: WindowSettings,
    pub form: FormDefaults,
    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormDefaults {
    pub start_date: String,
    pub end_date: String,
}

impl FormDefaults {
    pub fn to_form(&self) -> Result<FetchForm> {
        FetchForm::parse(&self.start_date, &self.end_date).map_err(|e| anyhow!("Invalid form defaults: {}", e))
    }
}

impl AppConfig {
    // The default config is embedded so the binary runs from any directory.
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.form.to_form()?;
        self.engine.validate()?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(anyhow!("Window size must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.window.title, "Bitcoin Historical Data Fetcher");
        assert_eq!(config.form.start_date, "2022-01-01");
        assert_eq!(config.form.end_date, "2025-01-01");
        assert_eq!(config.engine, EngineSettings::default());
    }

    #[test]
    fn test_engine_section_optional() {
        let config = AppConfig::from_json(
            r#"{ "version": "1", "app": { "theme": "light" },
                 "window": { "title": "t", "width": 800, "height": 600 },
                 "form": { "start_date": "2023-01-01", "end_date": "2023-02-01" } }"#,
        )
        .unwrap();
        assert_eq!(config.engine.api.pair, "btcusd");
    }

    #[test]
    fn test_invalid_form_default_rejected() {
        let result = AppConfig::from_json(
            r#"{ "version": "1", "app": { "theme": "dark" },
                 "window": { "title": "t", "width": 800, "height": 600 },
                 "form": { "start_date": "01/01/2023", "end_date": "2023-02-01" } }"#,
        );
        assert!(result.unwrap_err().to_string().contains("Invalid form defaults"));
    }
}
