//! Conversions from wire types to domain types for assets.

use super::wire::AssetResponse;
use super::{Asset, ValidationError};
use crate::shared::AssetId;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

fn decimal(id: &AssetId, field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    Decimal::from_f64(value).ok_or_else(|| ValidationError::InvalidNumber {
        id: id.clone(),
        field,
        value,
    })
}

impl TryFrom<AssetResponse> for Asset {
    type Error = ValidationError;

    fn try_from(a: AssetResponse) -> Result<Self, Self::Error> {
        if a.id.as_str().trim().is_empty() {
            return Err(ValidationError::MissingId);
        }

        let current_price = decimal(&a.id, "current_price", a.current_price)?;
        let market_cap = decimal(&a.id, "market_cap", a.market_cap)?;
        // An unrepresentable change is shown as missing rather than rejecting the quote.
        let price_change_pct_24h = a.price_change_percentage_24h.and_then(Decimal::from_f64);

        Ok(Self {
            id: a.id,
            symbol: a.symbol,
            name: a.name,
            image_url: a.image,
            current_price,
            market_cap,
            price_change_pct_24h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_response() -> AssetResponse {
        serde_json::from_str(
            r#"{
                "id": "btc",
                "symbol": "btc",
                "name": "Bitcoin",
                "image": "https://img.example/btc.png",
                "current_price": 65000,
                "market_cap": 1.3e12,
                "price_change_percentage_24h": -2.5
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_asset_response_conversion() {
        let asset = Asset::try_from(sample_response()).unwrap();
        assert_eq!(asset.id.as_str(), "btc");
        assert_eq!(asset.image_url, "https://img.example/btc.png");
        assert_eq!(asset.current_price, Decimal::from(65_000));
        assert_eq!(asset.market_cap, Decimal::from(1_300_000_000_000u64));
        assert_eq!(
            asset.price_change_pct_24h,
            Some(Decimal::from_str("-2.5").unwrap())
        );
    }

    #[test]
    fn test_missing_change_is_none() {
        let resp: AssetResponse =
            serde_json::from_str(r#"{"id": "eth", "current_price": 3000.5}"#).unwrap();
        let asset = Asset::try_from(resp).unwrap();
        assert_eq!(asset.price_change_pct_24h, None);
        assert_eq!(asset.market_cap, Decimal::ZERO);
        assert_eq!(asset.current_price, Decimal::from_str("3000.5").unwrap());
    }

    #[test]
    fn test_null_change_is_none() {
        let resp: AssetResponse = serde_json::from_str(
            r#"{"id": "eth", "current_price": 1, "price_change_percentage_24h": null}"#,
        )
        .unwrap();
        assert_eq!(Asset::try_from(resp).unwrap().price_change_pct_24h, None);
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let mut resp = sample_response();
        resp.id = AssetId::from("  ");
        assert_eq!(Asset::try_from(resp), Err(ValidationError::MissingId));
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let mut resp = sample_response();
        resp.current_price = f64::NAN;
        assert!(matches!(
            Asset::try_from(resp),
            Err(ValidationError::InvalidNumber {
                field: "current_price",
                ..
            })
        ));
    }
}
