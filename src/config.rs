//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "user_form=info";

/// Log file name inside the platform data directory
pub const LOG_FILE_NAME: &str = "user-form.log";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Tracing filter directive, e.g. `user_form=debug`
    pub log_filter: Option<String>,
    /// Where tracing output goes; the terminal is taken by the form
    pub log_file: Option<PathBuf>,
    /// Mark country, gender and hobbies touched when they change, not only on blur
    pub touch_choices_on_change: Option<bool>,
    /// Text shown after a successful submit
    pub acknowledgement: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "user-form", "user-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "user-form", "user-form")
            .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, defaulting when it is missing
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured log file, else the platform data directory
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    pub fn touch_choices_on_change(&self) -> bool {
        self.touch_choices_on_change.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("user-form-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.log_filter.is_none());
        assert!(config.touch_choices_on_change.is_none());
        assert!(config.acknowledgement.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(!config.touch_choices_on_change());
        if let Some(path) = config.log_file() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }

    #[test]
    fn test_log_file_override() {
        let config: FormConfig =
            serde_json::from_str(r#"{"log_file": "/tmp/form.log"}"#).unwrap();
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/form.log")));
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            log_filter: Some("user_form=debug".to_string()),
            log_file: None,
            touch_choices_on_change: Some(true),
            acknowledgement: Some("Thanks!".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.log_filter(), "user_form=debug");
        assert!(parsed.touch_choices_on_change());
        assert_eq!(parsed.acknowledgement, Some("Thanks!".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.log_filter.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"touch_choices_on_change": false, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.touch_choices_on_change, Some(false));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = temp_config_path("missing");
        let config = FormConfig::load_from(&path).unwrap();
        assert!(config.acknowledgement.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = FormConfig {
            acknowledgement: Some("Saved".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = FormConfig::load_from(&path).unwrap();
        assert_eq!(loaded.acknowledgement, Some("Saved".to_string()));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "not json").unwrap();

        assert!(FormConfig::load_from(&path).is_err());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
