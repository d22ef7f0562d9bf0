//! Percentage-change formatting.

use super::decimal::fixed;
use super::PLACEHOLDER;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Direction of a change, used by views to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentSign {
    Positive,
    Negative,
    Neutral,
}

/// A rendered percentage plus the sign the view styles it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPercentage {
    pub text: String,
    pub sign: PercentSign,
}

impl fmt::Display for FormattedPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format a percentage change: `+1.23%`, `-2.50%`, `+0.00%`.
///
/// The sign is taken from the rounded value, so `-0.001` is neutral.
/// `None` renders [`PLACEHOLDER`] with a neutral sign.
pub fn format_percentage(value: impl Into<Option<Decimal>>) -> FormattedPercentage {
    let Some(v) = value.into() else {
        return FormattedPercentage {
            text: PLACEHOLDER.to_string(),
            sign: PercentSign::Neutral,
        };
    };

    let body = fixed(&v, 2);
    if body.starts_with('-') {
        return FormattedPercentage {
            text: format!("{}%", body),
            sign: PercentSign::Negative,
        };
    }

    let sign = if body == "0.00" {
        PercentSign::Neutral
    } else {
        PercentSign::Positive
    };
    FormattedPercentage {
        text: format!("+{}%", body),
        sign,
    }
}
