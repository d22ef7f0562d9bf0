//! Wire types for the history endpoint.

use crate::shared::serde_util::timestamp_ms;
use serde::{Deserialize, Serialize};

/// One entry of `GET /crypto/history/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPointResponse {
    /// Epoch milliseconds; the backend may send an ISO string instead.
    #[serde(deserialize_with = "timestamp_ms::deserialize")]
    pub timestamp: i64,
    pub price: f64,
}
