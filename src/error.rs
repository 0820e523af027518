use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Status code errors. None of these are retried.
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Body errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API server error (5xx and any other unexpected status)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Maps a non-success, non-redirect HTTP status to its error variant.
    pub fn from_status(status_code: u16, reason: &str, url: &str) -> Self {
        match status_code {
            404 => Self::api_not_found(url),
            429 => Self::api_rate_limit(reason, url),
            400..=499 => Self::api_client_error(status_code, reason, url),
            _ => Self::api_server_error(status_code, reason, url),
        }
    }

    /// HTTP status carried by the error, if it came from a response status
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::ApiNotFound { .. } => Some(404),
            AppError::ApiRateLimit { .. } => Some(429),
            AppError::ApiClientError { status, .. } | AppError::ApiServerError { status, .. } => {
                Some(*status)
            }
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the API reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ApiNotFound { .. })
    }

    /// Check if the response body could not be turned into JSON
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiParse(_) | AppError::ApiMalformedJson { .. } | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://www.thebluealliance.com/api/v2/team/frc0");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://www.thebluealliance.com/api/v2/team/frc0"
        );
        assert!(error.is_not_found());
        assert!(!AppError::network_timeout("url").is_not_found());
    }

    #[test]
    fn test_from_status_mapping() {
        let url = "https://example.com/api/v2/team/frc3128";

        assert!(matches!(
            AppError::from_status(404, "Not Found", url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            AppError::from_status(429, "Too Many Requests", url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            AppError::from_status(401, "Unauthorized", url),
            AppError::ApiClientError { status: 401, .. }
        ));
        assert!(matches!(
            AppError::from_status(500, "Internal Server Error", url),
            AppError::ApiServerError { status: 500, .. }
        ));
        assert!(matches!(
            AppError::from_status(503, "Service Unavailable", url),
            AppError::ApiServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_status_accessor() {
        let url = "https://example.com";
        assert_eq!(AppError::from_status(404, "Not Found", url).status(), Some(404));
        assert_eq!(AppError::from_status(429, "slow down", url).status(), Some(429));
        assert_eq!(AppError::from_status(418, "teapot", url).status(), Some(418));
        assert_eq!(AppError::from_status(502, "Bad Gateway", url).status(), Some(502));
        assert_eq!(AppError::config_error("nope").status(), None);
        assert_eq!(AppError::api_malformed_json("bad", url).status(), None);
    }

    #[test]
    fn test_is_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(AppError::from(json_error).is_parse_error());
        assert!(AppError::api_malformed_json("bad", "url").is_parse_error());
        assert!(AppError::api_no_data("empty", "url").is_parse_error());
        assert!(!AppError::api_not_found("url").is_parse_error());
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Table>("invalid = = toml").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("https://example.com"),
            AppError::api_rate_limit("rate limit", "https://example.com"),
            AppError::api_client_error(400, "client error", "https://example.com"),
            AppError::api_server_error(500, "server error", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
