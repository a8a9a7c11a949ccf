use crate::session::DEFAULT_TOKEN_KEY;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use url::Url;

#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::Path};

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const ENV_API_URL: &str = "TODO_API_URL";
/// Environment variable overriding [`ClientConfig::token_storage_key`].
pub const ENV_TOKEN_KEY: &str = "TODO_TOKEN_KEY";
/// Environment variable overriding [`ClientConfig::notification_timeout_ms`].
pub const ENV_NOTIFICATION_TIMEOUT_MS: &str = "TODO_NOTIFICATION_TIMEOUT_MS";
/// Environment variable overriding [`ClientConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";

/// Errors raised while loading or checking a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported configuration format '{0}'. Use 'yaml', 'json', or 'toml'.")]
    UnsupportedFormat(String),

    #[error("Invalid {var} value: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid API base URL '{0}': must be an absolute http or https URL")]
    InvalidBaseUrl(String),

    #[error("Notification timeout must be greater than 0 ms")]
    InvalidTimeout,

    #[error("failed to serialize configuration: {0}")]
    Serialize(String),
}

/// On-disk formats understood by [`ClientConfig::load_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for anything but yaml, yml, json, or toml.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(value.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Settings for a todo client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the todo API
    pub api_base_url: String,

    /// Key of the persistent slot holding the bearer token
    pub token_storage_key: String,

    /// How long a notification stays up before it dismisses itself
    pub notification_timeout_ms: u32,

    /// Default tracing filter for the CLI
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            notification_timeout_ms: 5000,
            log_level: "warn".to_string(),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Environment variables only fill values the file left at their
    /// defaults; `api_url_override` wins over both.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, an
    /// environment value is malformed, or the result fails [`Self::validate`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<&Path>,
        api_url_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides()?;

        if let Some(url) = api_url_override {
            config.api_base_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, format).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Yaml => serde_yml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Applies `TODO_*` environment variables to values still at their defaults.
    ///
    /// # Errors
    /// [`ConfigError::InvalidEnv`] when the timeout variable is not a number.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let defaults = Self::with_defaults();

        if self.api_base_url == defaults.api_base_url
            && let Ok(url) = env::var(ENV_API_URL)
        {
            self.api_base_url = url;
        }
        if self.token_storage_key == defaults.token_storage_key
            && let Ok(key) = env::var(ENV_TOKEN_KEY)
        {
            self.token_storage_key = key;
        }
        if self.notification_timeout_ms == defaults.notification_timeout_ms
            && let Ok(timeout) = env::var(ENV_NOTIFICATION_TIMEOUT_MS)
        {
            self.notification_timeout_ms =
                timeout.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_NOTIFICATION_TIMEOUT_MS,
                    value: timeout,
                })?;
        }
        if self.log_level == defaults.log_level
            && let Ok(level) = env::var(ENV_LOG_LEVEL)
        {
            self.log_level = level;
        }

        Ok(())
    }

    /// Checks the base URL and the notification timeout.
    ///
    /// # Errors
    /// [`ConfigError::InvalidBaseUrl`] or [`ConfigError::InvalidTimeout`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.api_base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }

        if self.notification_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(())
    }

    /// Renders this configuration in `format`.
    ///
    /// # Errors
    /// [`ConfigError::Serialize`] if the serializer fails.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn serialize_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Yaml => {
                serde_yml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }
}
