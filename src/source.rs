//! `QuoteSource`: where the [`DataStore`](crate::store::DataStore) gets its data.
//!
//! [`CryptoClient`](crate::client::CryptoClient) implements this over HTTP.
//! Apps and tests can supply their own (fixtures, replay, in-memory).

use crate::domain::asset::{self, Asset};
use crate::domain::price_history::HistorySeries;
use crate::error::SdkError;
use crate::shared::AssetId;
use async_trait::async_trait;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteSource: Send + Sync {
    /// The full current-quote collection.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, SdkError>;

    /// One asset by id. There is no dedicated endpoint, so the default
    /// filters the collection and reports [`SdkError::AssetNotFound`].
    async fn fetch_asset(&self, id: &AssetId) -> Result<Asset, SdkError> {
        let assets = self.fetch_assets().await?;
        asset::find(&assets, id)
            .cloned()
            .ok_or_else(|| SdkError::AssetNotFound(id.clone()))
    }

    /// History series for one asset.
    async fn fetch_history(&self, id: &AssetId) -> Result<HistorySeries, SdkError>;
}
