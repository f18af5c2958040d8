//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the sensitive bot token (`TELEGRAM_BOT_TOKEN` is never
//! read from the file). A missing config file falls back to defaults.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Bot API token, injected from `TELEGRAM_BOT_TOKEN`.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

/// Pricing feed configuration.
#[derive(Debug, Deserialize)]
pub struct FeedConfig {
    pub api_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// The bot token is loaded from the `TELEGRAM_BOT_TOKEN` environment
    /// variable (never from the config file for security).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config: Self = if path.as_ref().exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        } else {
            Self::default()
        };

        config.bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.feed.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        Ok(())
    }

    /// Get the bot token, or an error if it was not provided.
    pub fn bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: "TELEGRAM_BOT_TOKEN" }.into())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: "https://admin.alanchand.com".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn load_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");

        let config = Config::load("/nonexistent/config.toml").unwrap();
        assert_eq!(config.feed.api_url, "https://admin.alanchand.com");
        assert_eq!(config.logging.level, "info");
        assert!(config.bot_token.is_none());
        assert!(config.bot_token().is_err());
    }

    #[test]
    fn load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[feed]\napi_url = \"https://example.com\"\n\n\
             [logging]\nlevel = \"debug\"\nformat = \"json\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.feed.api_url, "https://example.com");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn load_rejects_empty_api_url() {
        let _guard = ENV_LOCK.lock().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed]\napi_url = \"\"\n").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn bot_token_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");

        let config = Config::load("/nonexistent/config.toml").unwrap();
        assert_eq!(config.bot_token().unwrap(), "test-token");

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }
}
