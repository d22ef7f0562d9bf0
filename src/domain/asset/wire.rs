//! Wire types for the current-quote endpoint.

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

/// One entry of `GET /crypto/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: AssetId,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: f64,
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}
