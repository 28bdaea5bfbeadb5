//! Configuration Management
//!
//! Persistent settings for the `be` command line tool.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BASE_URL_ENV: &str = "BE_BASE_URL";
pub const TENANT_ENV: &str = "BE_TENANT";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// API root, e.g. `https://api.example.com`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Tenant handle used when `--tenant` is not given
    #[serde(default)]
    pub tenant: Option<String>,
    /// Token from the last successful `be login`
    #[serde(default)]
    pub authentication_token: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("business-elements").join("config.json"))
    }

    /// Load configuration from disk. Missing or unreadable files give defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, err);
                Self::default()
            }),
            Err(err) => {
                tracing::warn!("Failed to read config {:?}: {}", path, err);
                Self::default()
            },
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective base URL (CLI > config > env > default)
    pub fn effective_base_url(&self, cli: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        first_set(cli, self.base_url.as_deref(), env.as_deref())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective tenant (CLI > config > env). There is no default tenant.
    pub fn effective_tenant(&self, cli: Option<&str>) -> Option<String> {
        let env = std::env::var(TENANT_ENV).ok();
        first_set(cli, self.tenant.as_deref(), env.as_deref())
    }

    /// Remember a token and save
    pub fn set_authentication_token(&mut self, token: &str) -> Result<()> {
        self.authentication_token = Some(token.to_string());
        self.save()
    }

    /// Forget the stored token and save
    pub fn clear_authentication_token(&mut self) -> Result<()> {
        self.authentication_token = None;
        self.save()
    }
}

fn first_set(cli: Option<&str>, file: Option<&str>, env: Option<&str>) -> Option<String> {
    [cli, file, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("be-config-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_first_set_precedence() {
        assert_eq!(first_set(Some("cli"), Some("file"), Some("env")).as_deref(), Some("cli"));
        assert_eq!(first_set(None, Some("file"), Some("env")).as_deref(), Some("file"));
        assert_eq!(first_set(None, None, Some("env")).as_deref(), Some("env"));
        assert_eq!(first_set(None, None, None), None);
    }

    #[test]
    fn test_first_set_skips_blank_values() {
        assert_eq!(first_set(Some(" "), Some(""), Some("env")).as_deref(), Some("env"));
    }

    #[test]
    fn test_cli_wins_over_file() {
        let config = Config {
            base_url: Some("https://file.example.com".to_string()),
            tenant: Some("file.example.com".to_string()),
            authentication_token: None,
        };

        assert_eq!(
            config.effective_base_url(Some("https://cli.example.com")),
            "https://cli.example.com"
        );
        assert_eq!(
            config.effective_tenant(Some("cli.example.com")).as_deref(),
            Some("cli.example.com")
        );
        assert_eq!(config.effective_base_url(None), "https://file.example.com");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path();
        let config = Config {
            base_url: Some("https://api.example.com".to_string()),
            tenant: Some("example.com".to_string()),
            authentication_token: Some("token".to_string()),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_or_malformed_gives_default() {
        let path = temp_path();
        assert_eq!(Config::load_from(&path), Config::default());

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
