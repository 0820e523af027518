//! Async API client with per-instance response cache

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::endpoint_methods::{async_endpoint_methods, with_endpoint_methods};
use super::fetch_utils::fetch_resource;
use super::http_client::create_http_client;
use super::identity::AppIdentity;
use super::urls::{Endpoint, normalize_base_url};
use crate::config::Config;
use crate::constants::DEFAULT_API_BASE_URL;
use crate::data_fetcher::cache::ResponseCache;
use crate::error::AppError;

/// Client for The Blue Alliance v2 API.
///
/// Every successful response is cached for the lifetime of the client, keyed by
/// its URL, so repeated calls for the same resource hit the network once.
///
/// # Example
/// ```rust,no_run
/// use tba_api::TbaClient;
///
/// # async fn run() -> Result<(), tba_api::AppError> {
/// let client = TbaClient::new("frc3128", "scouting-app", "1.0")?;
/// let team = client.get_team("frc3128").await?;
/// println!("{}", team["rookie_year"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TbaClient {
    identity: AppIdentity,
    api_base_url: String,
    http: reqwest::Client,
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

    /// Creates a client from configuration: base URL, identity, timeout and cache capacity.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_options(
            config.identity(),
            &config.api_base_url,
            config.http_timeout_seconds,
            config.cache_capacity,
        )
    }

    /// Creates a client with explicit options.
    ///
    /// # Arguments
    /// * `identity` - Sent in the identification header
    /// * `api_base_url` - Prefix for every endpoint; a trailing `/` is added if missing
    /// * `timeout_seconds` - Optional request timeout, none by default
    /// * `cache_capacity` - Optional cache bound, unbounded by default
    pub fn with_options(
        identity: AppIdentity,
        api_base_url: &str,
        timeout_seconds: Option<u64>,
        cache_capacity: Option<usize>,
    ) -> Result<Self, AppError> {
        let http = create_http_client(&identity, timeout_seconds)?;
        let api_base_url = normalize_base_url(api_base_url);
        debug!(
            "Created API client: base_url={}, identity={}",
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

    /// Number of responses currently cached.
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// Retrieves a resource by full URL, from cache when possible.
    ///
    /// Redirects are followed. The final target's body is cached under `url`,
    /// and an error status from the target fails the call.
    pub async fn get_api_resource(&self, url: &str) -> Result<Value, AppError> {
        fetch_resource(&self.http, &self.cache, url).await
    }

    /// Retrieves a resource and deserializes it into `T`.
    ///
    /// The cached value stays the raw JSON, so different target types can be
    /// read from the same cached response.
    pub async fn get_api_resource_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let value = self.get_api_resource(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Retrieves the resource behind an endpoint.
    #[instrument(skip(self))]
    pub async fn fetch_endpoint(&self, endpoint: Endpoint<'_>) -> Result<Value, AppError> {
        let url = endpoint.url(&self.api_base_url);
        self.get_api_resource(&url).await
    }

    with_endpoint_methods!(async_endpoint_methods);
}
