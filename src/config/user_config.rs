//! User-level configuration for boardcheck
//!
//! Supports loading API credentials from:
//! - Environment variables (TRELLO_API_KEY, TRELLO_TOKEN, TRELLO_BASE_URL)
//! - ~/.config/boardcheck/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Trello API key
    pub key: Option<String>,

    /// Trello API token
    pub token: Option<String>,

    /// API base URL (default: https://api.trello.com/1)
    pub base_url: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/boardcheck/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(key) = std::env::var("TRELLO_API_KEY") {
            config.api.key = Some(key);
        }
        if let Ok(token) = std::env::var("TRELLO_TOKEN") {
            config.api.token = Some(token);
        }
        if let Ok(url) = std::env::var("TRELLO_BASE_URL") {
            config.api.base_url = Some(url);
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("boardcheck").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.api.key.is_some() {
            self.api.key = other.api.key;
        }
        if other.api.token.is_some() {
            self.api.token = other.api.token;
        }
        if other.api.base_url.is_some() {
            self.api.base_url = other.api.base_url;
        }
    }

    /// The credential pair, or an actionable error when either is missing.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match (self.api.key.as_deref(), self.api.token.as_deref()) {
            (Some(key), Some(token)) => Ok((key, token)),
            _ => anyhow::bail!(
                "Missing API credentials. Set TRELLO_API_KEY and TRELLO_TOKEN, \
                 or add them to {}",
                Self::user_config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "~/.config/boardcheck/config.toml".to_string())
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_credentials() {
        let config = UserConfig::default();
        assert!(config.credentials().is_err());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[api]
key = "k-123"
token = "t-456"
base_url = "https://trello.example.com/1"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        let (key, token) = config.credentials().unwrap();
        assert_eq!(key, "k-123");
        assert_eq!(token, "t-456");
        assert_eq!(config.base_url(), "https://trello.example.com/1");
    }

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = UserConfig {
            api: ApiConfig {
                key: Some("old-key".to_string()),
                token: None,
                base_url: None,
            },
        };
        let other = UserConfig {
            api: ApiConfig {
                key: Some("new-key".to_string()),
                token: Some("new-token".to_string()),
                base_url: None,
            },
        };
        base.merge(other);
        assert_eq!(base.api.key.as_deref(), Some("new-key"));
        assert_eq!(base.api.token.as_deref(), Some("new-token"));
        assert_eq!(base.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_credentials_error() {
        let config = UserConfig {
            api: ApiConfig {
                key: Some("k".to_string()),
                token: None,
                base_url: None,
            },
        };
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_user_config_path_returns_some() {
        if let Some(p) = UserConfig::user_config_path() {
            assert!(p.ends_with("boardcheck/config.toml"));
        }
    }
}
