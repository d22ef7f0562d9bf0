//! Custom serde helpers for backend wire formats.

/// Deserializes a history timestamp into Unix milliseconds.
///
/// The history endpoint sends `timestamp` either as epoch milliseconds
/// (integer or float) or as an ISO 8601 / RFC 3339 string.
pub mod timestamp_ms {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(ms) => Ok(ms),
            RawTimestamp::Float(ms) if ms.is_finite() => Ok(ms.round() as i64),
            RawTimestamp::Float(ms) => Err(serde::de::Error::custom(format!(
                "Invalid timestamp: {}",
                ms
            ))),
            RawTimestamp::Text(s) => parse_text(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
        }
    }

    fn parse_text(s: &str) -> Option<i64> {
        let s = s.trim();
        if let Ok(ms) = s.parse::<i64>() {
            return Some(ms);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.timestamp_millis());
        }
        // ISO without an offset is read as UTC.
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(with = "super::timestamp_ms")]
        timestamp: i64,
    }

    fn parse(json: &str) -> Result<i64, serde_json::Error> {
        serde_json::from_str::<Stamped>(json).map(|s| s.timestamp)
    }

    #[test]
    fn test_integer_millis() {
        assert_eq!(parse(r#"{"timestamp": 60000}"#).unwrap(), 60_000);
    }

    #[test]
    fn test_float_millis() {
        assert_eq!(parse(r#"{"timestamp": 1740076800000.0}"#).unwrap(), 1_740_076_800_000);
    }

    #[test]
    fn test_rfc3339_string() {
        assert_eq!(
            parse(r#"{"timestamp": "1970-01-01T00:01:00Z"}"#).unwrap(),
            60_000
        );
        assert_eq!(
            parse(r#"{"timestamp": "1970-01-01T01:01:00+01:00"}"#).unwrap(),
            60_000
        );
    }

    #[test]
    fn test_naive_iso_string_is_utc() {
        assert_eq!(
            parse(r#"{"timestamp": "1970-01-01T00:00:01.500"}"#).unwrap(),
            1_500
        );
    }

    #[test]
    fn test_numeric_string() {
        assert_eq!(parse(r#"{"timestamp": "120000"}"#).unwrap(), 120_000);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse(r#"{"timestamp": "yesterday"}"#).is_err());
        assert!(parse(r#"{"timestamp": null}"#).is_err());
    }
}
