//! Asset domain: current quotes for tracked assets.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Asset ───────────────────────────────────────────────────────────────────

/// Current quote for one tracked asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub image_url: String,
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub price_change_pct_24h: Option<Decimal>,
}

impl Asset {
    /// Ticker symbol as shown to users (`"btc"` → `"BTC"`).
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Header title, e.g. `"Bitcoin (BTC)"`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.display_symbol())
    }
}

impl From<&Asset> for AssetId {
    fn from(asset: &Asset) -> Self {
        asset.id.clone()
    }
}

impl From<Asset> for AssetId {
    fn from(asset: Asset) -> Self {
        asset.id
    }
}

/// Find an asset by id in a current-quote collection.
///
/// There is no single-asset endpoint; lookups are a filter over the list.
pub fn find<'a>(assets: &'a [Asset], id: &AssetId) -> Option<&'a Asset> {
    assets.iter().find(|a| &a.id == id)
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("asset id is missing")]
    MissingId,

    #[error("asset {id}: {field} is not a representable number ({value})")]
    InvalidNumber {
        id: AssetId,
        field: &'static str,
        value: f64,
    },
}
