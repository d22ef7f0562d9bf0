//! Display formatting: USD currency, compact magnitudes, percentage change.
//!
//! Every formatter is pure and total. Missing values render [`PLACEHOLDER`].

pub mod decimal;
pub mod num;
pub mod percent;

pub use decimal::{format_compact_currency, format_currency, format_market_cap};
pub use percent::{format_percentage, FormattedPercentage, PercentSign};

/// Rendered in place of a missing value.
pub const PLACEHOLDER: &str = "N/A";
