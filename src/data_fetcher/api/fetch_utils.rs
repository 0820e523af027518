//! Shared fetch path: cache lookup, authenticated GET, status check, JSON parsing

use reqwest::StatusCode;
use serde_json::Value;
use std::sync::PoisonError;
use tracing::{debug, error, info, instrument};

use crate::constants::LOG_BODY_PREVIEW_CHARS;
use crate::data_fetcher::cache::ResponseCache;
use crate::error::AppError;

/// Fetches a resource, serving it from `cache` when the URL was fetched before.
///
/// This function:
/// - Returns the cached value for `url` without touching the network, if present
/// - Otherwise issues a GET (the client carries the identification header)
/// - Follows redirects; a redirection status that reaches this point (e.g. 304) counts as success
/// - Parses the body as JSON and caches it under `url`
///
/// Failures are returned as-is and never cached, so a later call retries the network.
/// The cache lock is not held while the request is in flight.
#[instrument(skip(client, cache))]
pub(crate) async fn fetch_resource(
    client: &reqwest::Client,
    cache: &tokio::sync::Mutex<ResponseCache>,
    url: &str,
) -> Result<Value, AppError> {
    let cached = cache.lock().await.get(url).cloned();
    if let Some(cached) = cached {
        debug!("Using cached HTTP response for URL: {url}");
        return Ok(cached);
    }

    info!("Fetching data from URL: {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| transport_error(e, url))?;

    check_status(response.status(), url)?;

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    let data = parse_body(&response_text, url)?;
    cache.lock().await.set(url, data.clone());
    Ok(data)
}

/// Blocking counterpart of [`fetch_resource`] with identical semantics.
#[instrument(skip(client, cache))]
pub(crate) fn fetch_resource_blocking(
    client: &reqwest::blocking::Client,
    cache: &std::sync::Mutex<ResponseCache>,
    url: &str,
) -> Result<Value, AppError> {
    let cached = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(url)
        .cloned();
    if let Some(cached) = cached {
        debug!("Using cached HTTP response for URL: {url}");
        return Ok(cached);
    }

    info!("Fetching data from URL: {url}");
    let response = client
        .get(url)
        .send()
        .map_err(|e| transport_error(e, url))?;

    check_status(response.status(), url)?;

    let response_text = response.text().map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    let data = parse_body(&response_text, url)?;
    cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .set(url, data.clone());
    Ok(data)
}

/// Classifies a reqwest send error.
fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Accepts success and redirection statuses, maps everything else to an error.
fn check_status(status: StatusCode, url: &str) -> Result<(), AppError> {
    debug!("Response status: {status}");

    if status.is_success() || status.is_redirection() {
        return Ok(());
    }

    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    Err(AppError::from_status(status_code, reason, url))
}

/// Parses a response body as JSON.
fn parse_body(response_text: &str, url: &str) -> Result<Value, AppError> {
    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(LOG_BODY_PREVIEW_CHARS).collect();
    debug!("Response text (first {LOG_BODY_PREVIEW_CHARS} chars): {preview}");

    if response_text.trim().is_empty() {
        error!("Empty response body (URL: {})", url);
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        AppError::api_malformed_json(e.to_string(), url)
    })
}
