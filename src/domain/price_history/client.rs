//! Price history sub-client.

use crate::client::CryptoClient;
use crate::domain::price_history::HistorySeries;
use crate::error::SdkError;
use crate::shared::AssetId;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Fetch the history series for `asset_id`, ordered by timestamp.
    pub async fn get(&self, asset_id: &AssetId) -> Result<HistorySeries, SdkError> {
        let raw = self
            .client
            .http
            .get_price_history(asset_id.as_str())
            .await?;

        HistorySeries::from_wire(asset_id.clone(), raw)
            .map_err(|e| SdkError::Validation(e.to_string()))
    }
}
