//! Conversions from wire types to domain types for price history.

use super::wire::HistoryPointResponse;
use super::{HistoryPoint, HistorySeries, ValidationError};
use crate::shared::AssetId;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

impl HistorySeries {
    /// Convert a raw history response for `asset_id` into an ordered series.
    pub fn from_wire(
        asset_id: AssetId,
        points: Vec<HistoryPointResponse>,
    ) -> Result<Self, ValidationError> {
        let points = points
            .into_iter()
            .map(|p| {
                Decimal::from_f64(p.price)
                    .map(|price| HistoryPoint {
                        timestamp_ms: p.timestamp,
                        price,
                    })
                    .ok_or_else(|| ValidationError::InvalidPrice {
                        id: asset_id.clone(),
                        timestamp_ms: p.timestamp,
                        value: p.price,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HistorySeries::new(asset_id, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_orders_points() {
        let raw: Vec<HistoryPointResponse> = serde_json::from_str(
            r#"[{"timestamp": 60000, "price": 110}, {"timestamp": 0, "price": 100}]"#,
        )
        .unwrap();
        let series = HistorySeries::from_wire(AssetId::from("btc"), raw).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].price, Decimal::from(100));
        assert_eq!(series.points()[1].price, Decimal::from(110));
        assert_eq!(series.asset_id().as_str(), "btc");
    }

    #[test]
    fn test_from_wire_accepts_iso_timestamps() {
        let raw: Vec<HistoryPointResponse> = serde_json::from_str(
            r#"[{"timestamp": "2025-02-20T18:40:00Z", "price": 1.5}]"#,
        )
        .unwrap();
        let series = HistorySeries::from_wire(AssetId::from("eth"), raw).unwrap();
        assert_eq!(series.points()[0].timestamp_ms, 1_740_076_800_000);
    }

    #[test]
    fn test_from_wire_empty_is_ok() {
        let series = HistorySeries::from_wire(AssetId::from("btc"), Vec::new()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_from_wire_rejects_non_finite_price() {
        let raw = vec![HistoryPointResponse {
            timestamp: 5,
            price: f64::INFINITY,
        }];
        assert!(matches!(
            HistorySeries::from_wire(AssetId::from("btc"), raw),
            Err(ValidationError::InvalidPrice { timestamp_ms: 5, .. })
        ));
    }
}
