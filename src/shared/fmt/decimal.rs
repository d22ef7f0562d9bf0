//! USD currency formatting for `rust_decimal::Decimal` values.
//!
//! Rounding is half-away-from-zero, matching what browsers do for
//! `Intl.NumberFormat`, not the banker's rounding `Decimal::round_dp` uses.

use super::num::group_thousands;
use super::PLACEHOLDER;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;
use std::sync::OnceLock;

static TRILLION: OnceLock<Decimal> = OnceLock::new();
static BILLION: OnceLock<Decimal> = OnceLock::new();
static MILLION: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn get_trillion() -> &'static Decimal {
    TRILLION.get_or_init(|| Decimal::from(1_000_000_000_000u64))
}

fn get_billion() -> &'static Decimal {
    BILLION.get_or_init(|| Decimal::from(1_000_000_000u64))
}

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000u64))
}

fn get_thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from(1_000u64))
}

/// Round to `dp` places and render with exactly `dp` fraction digits.
///
/// Values that round to zero never carry a minus sign.
pub(crate) fn fixed(value: &Decimal, dp: u32) -> String {
    let mut rounded = round_half_up(value, dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(dp);
    rounded.to_string()
}

fn round_half_up(value: &Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Prefix a rendered amount with `$`, keeping the sign in front.
fn usd(rendered: &str) -> String {
    match rendered.strip_prefix('-') {
        Some(unsigned) => format!("-${}", unsigned),
        None => format!("${}", rendered),
    }
}

/// Format as USD with two fraction digits: `$65,000.00`, `-$5.25`.
///
/// `None` renders [`PLACEHOLDER`].
pub fn format_currency(value: impl Into<Option<Decimal>>) -> String {
    match value.into() {
        Some(v) => usd(&group_thousands(&fixed(&v, 2))),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format as whole-dollar USD: `$1,300,000,000,000`.
///
/// `None` renders [`PLACEHOLDER`].
pub fn format_market_cap(value: impl Into<Option<Decimal>>) -> String {
    match value.into() {
        Some(v) => usd(&group_thousands(&fixed(&v, 0))),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format as USD with a K/M/B/T magnitude suffix: `$1.30T`, `$12.35K`.
///
/// Amounts that would round up to the next magnitude are promoted
/// (`999_999.999` renders `$1.00M`, not `$1000.00K`). `None` renders
/// [`PLACEHOLDER`].
pub fn format_compact_currency(value: impl Into<Option<Decimal>>) -> String {
    let Some(v) = value.into() else {
        return PLACEHOLDER.to_string();
    };

    let (scaled, suffix) = compact_parts(v.abs());
    let body = fixed(&scaled, 2);
    if v.is_sign_negative() && body != "0.00" {
        format!("-${}{}", body, suffix)
    } else {
        format!("${}{}", body, suffix)
    }
}

fn compact_parts(abs: Decimal) -> (Decimal, &'static str) {
    let units: [(&Decimal, &'static str); 4] = [
        (get_trillion(), "T"),
        (get_billion(), "B"),
        (get_million(), "M"),
        (get_thousand(), "K"),
    ];
    let thousand = *get_thousand();

    for (idx, (unit, suffix)) in units.iter().enumerate() {
        if abs >= **unit {
            let scaled = abs / **unit;
            if idx > 0 && round_half_up(&scaled, 2) >= thousand {
                let (bigger, bigger_suffix) = units[idx - 1];
                return (abs / *bigger, bigger_suffix);
            }
            return (scaled, *suffix);
        }
    }

    if round_half_up(&abs, 2) >= thousand {
        return (abs / thousand, "K");
    }
    (abs, "")
}
