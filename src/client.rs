//! High-level client: `CryptoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::asset::client::Assets;
use crate::domain::asset::Asset;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::price_history::HistorySeries;
use crate::error::SdkError;
use crate::http::{CryptoHttp, RetryPolicy};
use crate::shared::AssetId;
use crate::source::QuoteSource;

use async_lock::RwLock;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point for talking to the price API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.assets()`, `client.price_history()`.
#[derive(Clone)]
pub struct CryptoClient {
    pub(crate) http: CryptoHttp,
    /// Last current-quote collection and when it was fetched.
    pub(crate) asset_cache: Arc<RwLock<Option<(Vec<Asset>, Instant)>>>,
    /// Cache TTL for the current-quote collection. Zero disables the cache.
    pub(crate) asset_cache_ttl: Duration,
}

impl CryptoClient {
    pub fn builder() -> CryptoClientBuilder {
        CryptoClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.asset_cache.write().await.take();
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteSource for CryptoClient {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, SdkError> {
        self.assets().list().await
    }

    async fn fetch_asset(&self, id: &AssetId) -> Result<Asset, SdkError> {
        self.assets().get(id).await
    }

    async fn fetch_history(&self, id: &AssetId) -> Result<HistorySeries, SdkError> {
        self.price_history().get(id).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptoClientBuilder {
    base_url: String,
    request_timeout: Option<Duration>,
    asset_cache_ttl: Duration,
    retry: RetryPolicy,
}

impl Default for CryptoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            asset_cache_ttl: Duration::from_secs(30),
            retry: RetryPolicy::Idempotent,
        }
    }
}

impl CryptoClientBuilder {
    /// Start from the environment: base URL from
    /// [`API_URL_ENV`](crate::network::API_URL_ENV), defaults elsewhere.
    pub fn from_env() -> Self {
        Self {
            base_url: crate::network::api_url_from_env(),
            ..Self::default()
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only). `None` disables it.
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn asset_cache_ttl(mut self, ttl: Duration) -> Self {
        self.asset_cache_ttl = ttl;
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<CryptoClient, SdkError> {
        tracing::debug!(base_url = %self.base_url, "Building price API client");
        Ok(CryptoClient {
            http: CryptoHttp::new(&self.base_url, self.request_timeout, self.retry)?,
            asset_cache: Arc::new(RwLock::new(None)),
            asset_cache_ttl: self.asset_cache_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CryptoClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.asset_cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let client = CryptoClient::builder()
            .base_url("https://prices.example.com/api/")
            .asset_cache_ttl(Duration::ZERO)
            .retry(RetryPolicy::None)
            .request_timeout(None)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://prices.example.com/api");
        assert_eq!(client.asset_cache_ttl, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_clear_all_caches_empties_asset_cache() {
        let client = CryptoClient::builder().build().unwrap();
        *client.asset_cache.write().await = Some((Vec::new(), Instant::now()));
        client.clear_all_caches().await;
        assert!(client.asset_cache.read().await.is_none());
    }
}
