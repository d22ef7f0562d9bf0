//! Price history domain: time-ordered price points for one asset.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    pub price: Decimal,
}

/// History for one asset, ordered by non-decreasing timestamp.
///
/// An empty series is valid: it means "no data", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesParts")]
pub struct HistorySeries {
    asset_id: AssetId,
    points: Vec<HistoryPoint>,
}

/// Deserialized fields, re-sorted through [`HistorySeries::new`].
#[derive(Deserialize)]
struct SeriesParts {
    asset_id: AssetId,
    points: Vec<HistoryPoint>,
}

impl From<SeriesParts> for HistorySeries {
    fn from(parts: SeriesParts) -> Self {
        HistorySeries::new(parts.asset_id, parts.points)
    }
}

impl HistorySeries {
    /// Build a series, ordering points by timestamp.
    ///
    /// The sort is stable, so points sharing a timestamp keep their
    /// upstream order.
    pub fn new(asset_id: AssetId, mut points: Vec<HistoryPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp_ms);
        Self { asset_id, points }
    }

    pub fn empty(asset_id: AssetId) -> Self {
        Self {
            asset_id,
            points: Vec::new(),
        }
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last timestamps, if any.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp_ms, last.timestamp_ms)),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("history for {id}: price at {timestamp_ms} is not a representable number ({value})")]
    InvalidPrice {
        id: AssetId,
        timestamp_ms: i64,
        value: f64,
    },
}
