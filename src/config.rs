//! Configuration management for the Zuvigo chat client
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, ZuvigoError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for the chat client
///
/// This structure holds all configuration needed by the client: backend
/// endpoint settings, chat front-end behavior, and profile storage location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend endpoint configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat front-end configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Profile storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend endpoint configuration
///
/// The base URL is resolved once at startup; both the completion endpoint
/// and the lead-capture endpoint are derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the chat backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Chat front-end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Offer the canned conversation openers while the transcript is fresh
    #[serde(default = "default_show_suggestions")]
    pub show_suggestions: bool,
}

fn default_show_suggestions() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            show_suggestions: default_show_suggestions(),
        }
    }
}

/// Profile storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit profile database path; defaults to the user data directory
    #[serde(default)]
    pub profile_db: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ZuvigoError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ZuvigoError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        // Backend overrides. ZUVIGO_API_URL mirrors the environment-provided
        // base URL the deployed widget reads at startup.
        if let Ok(base_url) = std::env::var("ZUVIGO_API_URL") {
            self.backend.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("ZUVIGO_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.backend.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid ZUVIGO_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(show) = std::env::var("ZUVIGO_SHOW_SUGGESTIONS") {
            match show.parse::<bool>() {
                Ok(v) => self.chat.show_suggestions = v,
                Err(_) => {
                    tracing::warn!("Invalid ZUVIGO_SHOW_SUGGESTIONS: {}", show);
                }
            }
        }

        if let Ok(db_path) = std::env::var("ZUVIGO_PROFILE_DB") {
            self.storage.profile_db = Some(PathBuf::from(db_path));
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(db_path) = &cli.profile_db {
            self.storage.profile_db = Some(PathBuf::from(db_path));
        }
    }

    /// Validate the configuration
    ///
    /// Ensures the base URL is a parseable absolute http(s) URL and that the
    /// timeout is nonzero.
    ///
    /// # Returns
    ///
    /// Returns Ok if configuration is valid
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(ZuvigoError::Config("Base URL cannot be empty".to_string()).into());
        }

        let parsed = url::Url::parse(&self.backend.base_url).map_err(|e| {
            ZuvigoError::Config(format!(
                "Invalid base URL {}: {}",
                self.backend.base_url, e
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ZuvigoError::Config(format!(
                "Base URL must use http or https, got: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.backend.timeout_seconds == 0 {
            return Err(
                ZuvigoError::Config("timeout_seconds must be greater than 0".to_string()).into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:3000");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert!(config.chat.show_suggestions);
        assert!(config.storage.profile_db.is_none());
    }

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
backend:
  base_url: "https://api.zuvigo.com"
  timeout_seconds: 10
chat:
  show_suggestions: false
storage:
  profile_db: "/tmp/zuvigo/profile.db"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.base_url, "https://api.zuvigo.com");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert!(!config.chat.show_suggestions);
        assert_eq!(
            config.storage.profile_db,
            Some(PathBuf::from("/tmp/zuvigo/profile.db"))
        );
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let yaml = r#"
backend:
  base_url: "https://api.zuvigo.com"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.base_url, "https://api.zuvigo.com");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert!(config.chat.show_suggestions);
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = Config {
            backend: BackendConfig {
                base_url: String::new(),
                timeout_seconds: 30,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unparseable_url() {
        let config = Config {
            backend: BackendConfig {
                base_url: "not a url".to_string(),
                timeout_seconds: 30,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            backend: BackendConfig {
                base_url: "ftp://example.com".to_string(),
                timeout_seconds: 30,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            backend: BackendConfig {
                base_url: default_base_url(),
                timeout_seconds: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_base_url() {
        std::env::set_var("ZUVIGO_API_URL", "https://staging.zuvigo.com");

        let mut config = Config::default();
        config.apply_env_vars();

        std::env::remove_var("ZUVIGO_API_URL");

        assert_eq!(config.backend.base_url, "https://staging.zuvigo.com");
    }

    #[test]
    #[serial]
    fn test_env_override_invalid_timeout_keeps_default() {
        std::env::set_var("ZUVIGO_TIMEOUT_SECONDS", "not-a-number");

        let mut config = Config::default();
        config.apply_env_vars();

        std::env::remove_var("ZUVIGO_TIMEOUT_SECONDS");

        assert_eq!(config.backend.timeout_seconds, 30);
    }

    #[test]
    #[serial]
    fn test_env_override_profile_db() {
        std::env::set_var("ZUVIGO_PROFILE_DB", "/tmp/override.db");

        let mut config = Config::default();
        config.apply_env_vars();

        std::env::remove_var("ZUVIGO_PROFILE_DB");

        assert_eq!(
            config.storage.profile_db,
            Some(PathBuf::from("/tmp/override.db"))
        );
    }

    #[test]
    #[serial]
    fn test_load_missing_file_falls_back_to_defaults() {
        let cli = crate::cli::Cli::default();
        let config = Config::load("does/not/exist.yaml", &cli).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:3000");
    }
}
