use crate::error::AppError;
use std::path::Path;

use super::Config;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must start with `http://` or `https://`
/// - Organization, app identifier and app version cannot be empty
/// - HTTP timeout and cache capacity, when set, must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_api_base_url(&config.api_base_url)?;

    for (name, value) in [
        ("Organization", &config.organization),
        ("App identifier", &config.app_identifier),
        ("App version", &config.app_version),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::config_error(format!("{name} cannot be empty")));
        }
    }

    if config.http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero seconds",
        ));
    }

    if config.cache_capacity == Some(0) {
        return Err(AppError::config_error(
            "Cache capacity must be greater than zero; leave it unset for an unbounded cache",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        validate_log_file_path(log_path)?;
    }

    Ok(())
}

fn validate_api_base_url(api_base_url: &str) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    Ok(())
}

fn validate_log_file_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
