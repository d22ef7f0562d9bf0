//! Assets sub-client: current-quote collection, by-id lookup, cache.

use crate::client::CryptoClient;
use crate::domain::asset::{self, Asset};
use crate::error::SdkError;
use crate::shared::AssetId;
use std::time::Instant;

/// Sub-client for current-quote operations.
pub struct Assets<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Assets<'a> {
    /// Fetch the full current-quote collection. Always hits the network and
    /// refreshes the cache.
    pub async fn list(&self) -> Result<Vec<Asset>, SdkError> {
        let resp = self.client.http.get_current_prices().await?;
        let assets = resp
            .into_iter()
            .map(Asset::try_from)
            .collect::<Result<Vec<_>, asset::ValidationError>>()
            .map_err(|e| SdkError::Validation(e.to_string()))?;

        tracing::debug!(count = assets.len(), "Fetched current quotes");
        *self.client.asset_cache.write().await = Some((assets.clone(), Instant::now()));
        Ok(assets)
    }

    /// Get one asset by id. Uses the cached collection while it is fresh,
    /// otherwise refetches the list and filters it.
    pub async fn get(&self, id: &AssetId) -> Result<Asset, SdkError> {
        {
            let cache = self.client.asset_cache.read().await;
            if let Some((assets, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.asset_cache_ttl {
                    if let Some(found) = asset::find(assets, id) {
                        return Ok(found.clone());
                    }
                }
            }
        }

        let assets = self.list().await?;
        asset::find(&assets, id)
            .cloned()
            .ok_or_else(|| SdkError::AssetNotFound(id.clone()))
    }

    /// Drop the cached collection.
    pub async fn invalidate(&self) {
        self.client.asset_cache.write().await.take();
    }
}
