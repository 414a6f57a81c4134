//! Configuration handling for the TUI

use crate::validation::StateMessage;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Wording for an invalid state ("select" or "code")
    pub state_message: Option<StateMessage>,
    /// Show the HIPAA privacy notice above the consent box
    pub show_privacy_notice: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "plan4you", "plan4you-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn state_message(&self) -> StateMessage {
        self.state_message.unwrap_or_default()
    }

    pub fn show_privacy_notice(&self) -> bool {
        self.show_privacy_notice.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("plan4you-tui-{tag}-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.state_message.is_none());
        assert!(config.show_privacy_notice.is_none());
        assert_eq!(config.state_message(), StateMessage::Select);
        assert!(config.show_privacy_notice());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            state_message: Some(StateMessage::Code),
            show_privacy_notice: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""state_message":"code""#));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.state_message, Some(StateMessage::Code));
        assert_eq!(parsed.show_privacy_notice, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.state_message.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"state_message": "select", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.state_message, Some(StateMessage::Select));
    }

    #[test]
    fn test_invalid_state_message_is_an_error() {
        let json = r#"{"state_message": "shout"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_load_from_missing_file_gives_default() {
        let path = temp_config_path("missing");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.state_message.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = TuiConfig {
            state_message: Some(StateMessage::Code),
            show_privacy_notice: None,
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.state_message(), StateMessage::Code);
        assert!(loaded.show_privacy_notice());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_is_app_scoped_json() {
        // No home directory means no path; load() then falls back to defaults.
        if let Some(path) = TuiConfig::config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
            assert!(path
                .components()
                .any(|c| c.as_os_str().to_string_lossy().contains("plan4you-tui")));
        }
    }
}
