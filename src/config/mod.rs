use crate::constants::{DEFAULT_API_BASE_URL, LOG_FILE_NAME, env_vars};
use crate::data_fetcher::api::AppIdentity;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Client configuration.
/// Handles loading, saving, and managing settings for API clients and the CLI.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Organization or person responsible for the requests.
    #[serde(default)]
    pub organization: String,
    /// Identifier of the app or experiment making the requests.
    #[serde(default)]
    pub app_identifier: String,
    /// Version of the app making the requests.
    #[serde(default)]
    pub app_version: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Maximum number of cached responses. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            organization: String::new(),
            app_identifier: String::new(),
            app_version: String::new(),
            log_file_path: None,
            http_timeout_seconds: None,
            cache_capacity: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, applies
    /// environment overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `TBA_API_BASE_URL` - Override API base URL
    /// - `TBA_ORGANIZATION`, `TBA_APP_IDENTIFIER`, `TBA_APP_VERSION` - Override identity
    /// - `TBA_LOG_FILE` - Override log file path
    /// - `TBA_HTTP_TIMEOUT` - Request timeout in seconds
    /// - `TBA_CACHE_CAPACITY` - Maximum number of cached responses
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unchecked(&get_config_path()).await?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists (defaults otherwise) and applies environment
    /// overrides, without validating. Callers layering further overrides on top
    /// validate once they are done.
    pub async fn load_unchecked(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a specific file path without overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides fields from `TBA_*` environment variables that are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }
        if let Ok(organization) = std::env::var(env_vars::ORGANIZATION) {
            self.organization = organization;
        }
        if let Ok(app_identifier) = std::env::var(env_vars::APP_IDENTIFIER) {
            self.app_identifier = app_identifier;
        }
        if let Ok(app_version) = std::env::var(env_vars::APP_VERSION) {
            self.app_version = app_version;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = parse_env(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = Some(timeout);
        }
        if let Some(capacity) = parse_env(env_vars::CACHE_CAPACITY) {
            self.cache_capacity = Some(capacity);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Identity sent with every request.
    pub fn identity(&self) -> AppIdentity {
        AppIdentity::new(&self.organization, &self.app_identifier, &self.app_version)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let optional = |value: Option<String>, unset: &str| value.unwrap_or_else(|| unset.to_string());

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created yet)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", self.api_base_url);
        println!("────────────────────────────────────");
        println!("App Identity:");
        println!("{}", self.identity().header_value());
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!(
            "{}",
            optional(
                self.http_timeout_seconds.map(|s| format!("{s} seconds")),
                "none"
            )
        );
        println!("────────────────────────────────────");
        println!("Cache Capacity:");
        println!(
            "{}",
            optional(self.cache_capacity.map(|c| c.to_string()), "unbounded")
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{LOG_FILE_NAME}", get_log_dir_path());
            println!("(Default location)");
        }
    }
}

/// Reads and parses an environment variable, ignoring (with a warning) values that do not parse.
fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable value for {name}: {raw:?}");
            None
        }
    }
}
