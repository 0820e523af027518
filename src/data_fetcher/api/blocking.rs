//! Blocking API client
//!
//! Same endpoints, cache and error semantics as the async [`TbaClient`](super::TbaClient),
//! but every call blocks the current thread until the response (or cache hit) is
//! available. Must not be used from within an async runtime.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

use super::endpoint_methods::{blocking_endpoint_methods, with_endpoint_methods};
use super::fetch_utils::fetch_resource_blocking;
use super::http_client::create_blocking_http_client;
use super::identity::AppIdentity;
use super::urls::{Endpoint, normalize_base_url};
use crate::config::Config;
use crate::constants::DEFAULT_API_BASE_URL;
use crate::data_fetcher::cache::ResponseCache;
use crate::error::AppError;

/// Blocking client for The Blue Alliance v2 API.
///
/// # Example
/// ```rust,no_run
/// use tba_api::blocking::TbaClient;
///
/// let client = TbaClient::new("frc3128", "scouting-app", "1.0")?;
/// let matches = client.get_event_matches("2015casd")?;
/// println!("{}", matches[0]["key"]);
/// # Ok::<(), tba_api::AppError>(())
/// ```
#[derive(Debug)]
pub struct TbaClient {
    identity: AppIdentity,
    api_base_url: String,
    http: reqwest::blocking::Client,
    cache: Mutex<ResponseCache>,
}

impl TbaClient {
    /// Creates a client for the public API with an unbounded cache.
    pub fn new(
        organization: impl Into<String>,
        app_identifier: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, AppError> {
        let identity = AppIdentity::new(organization, app_identifier, version);
        Self::with_options(identity, DEFAULT_API_BASE_URL, None, None)
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_options(
            config.identity(),
            &config.api_base_url,
            config.http_timeout_seconds,
            config.cache_capacity,
        )
    }

    pub fn with_options(
        identity: AppIdentity,
        api_base_url: &str,
        timeout_seconds: Option<u64>,
        cache_capacity: Option<usize>,
    ) -> Result<Self, AppError> {
        let http = create_blocking_http_client(&identity, timeout_seconds)?;
        let api_base_url = normalize_base_url(api_base_url);
        debug!(
            "Created blocking API client: base_url={}, identity={}",
            api_base_url,
            identity.header_value()
        );

        Ok(Self {
            identity,
            api_base_url,
            http,
            cache: Mutex::new(ResponseCache::from_capacity(cache_capacity)),
        })
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Retrieves a resource by full URL, from cache when possible.
    ///
    /// Redirects are followed. The final target's body is cached under `url`,
    /// and an error status from the target fails the call.
    pub fn get_api_resource(&self, url: &str) -> Result<Value, AppError> {
        fetch_resource_blocking(&self.http, &self.cache, url)
    }

    pub fn get_api_resource_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let value = self.get_api_resource(url)?;
        Ok(serde_json::from_value(value)?)
    }

    #[instrument(skip(self))]
    pub fn fetch_endpoint(&self, endpoint: Endpoint<'_>) -> Result<Value, AppError> {
        let url = endpoint.url(&self.api_base_url);
        self.get_api_resource(&url)
    }

    with_endpoint_methods!(blocking_endpoint_methods);
}
