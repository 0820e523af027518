//! Library-wide constants
//!
//! Centralizes the API location, header names and default file locations
//! so that the client, config and CLI layers agree on them.

/// Default base URL of The Blue Alliance v2 API. Endpoint paths are appended verbatim.
pub const DEFAULT_API_BASE_URL: &str = "https://www.thebluealliance.com/api/v2/";

/// Header carrying the caller's identity on every request
pub const APP_ID_HEADER: &str = "X-TBA-App-Id";

/// Separator between identity parts in the app id header
pub const APP_ID_SEPARATOR: char = ':';

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Number of response bytes echoed to debug logs
pub const LOG_BODY_PREVIEW_CHARS: usize = 512;

/// Directory name used under the platform config dir
pub const CONFIG_DIR_NAME: &str = "tba_api";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "tba_api.log";

/// Default tracing filter directive for the CLI
pub const DEFAULT_LOG_DIRECTIVE: &str = "tba_api=info";

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_BASE_URL: &str = "TBA_API_BASE_URL";
    pub const ORGANIZATION: &str = "TBA_ORGANIZATION";
    pub const APP_IDENTIFIER: &str = "TBA_APP_IDENTIFIER";
    pub const APP_VERSION: &str = "TBA_APP_VERSION";
    pub const LOG_FILE: &str = "TBA_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "TBA_HTTP_TIMEOUT";
    pub const CACHE_CAPACITY: &str = "TBA_CACHE_CAPACITY";
}
