//! HTTP client creation and configuration utilities

use reqwest::header::HeaderMap;
use std::time::Duration;

use super::identity::AppIdentity;
use crate::constants::{APP_ID_HEADER, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::error::AppError;

/// Builds the default header set: the identification header and nothing else.
fn identity_headers(identity: &AppIdentity) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(APP_ID_HEADER, identity.to_header()?);
    Ok(headers)
}

/// Creates an async HTTP client that sends the identification header on every request.
///
/// # Arguments
/// * `identity` - Caller identity sent in the `X-TBA-App-Id` header
/// * `timeout_seconds` - Optional whole-request timeout. `None` leaves reqwest's default (no timeout).
///
/// # Returns
/// * `Result<Client, AppError>` - A configured reqwest client, or a config error
///   when the identity cannot be encoded as a header
pub fn create_http_client(
    identity: &AppIdentity,
    timeout_seconds: Option<u64>,
) -> Result<reqwest::Client, AppError> {
    let mut builder = reqwest::Client::builder()
        .default_headers(identity_headers(identity)?)
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST);

    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    Ok(builder.build()?)
}

/// Creates a blocking HTTP client with the same header and timeout setup as
/// [`create_http_client`].
///
/// Must not be called from within an async runtime.
pub fn create_blocking_http_client(
    identity: &AppIdentity,
    timeout_seconds: Option<u64>,
) -> Result<reqwest::blocking::Client, AppError> {
    let mut builder = reqwest::blocking::Client::builder()
        .default_headers(identity_headers(identity)?)
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST);

    // The blocking builder applies a 30s timeout unless told otherwise
    builder = builder.timeout(timeout_seconds.map(Duration::from_secs));

    Ok(builder.build()?)
}
