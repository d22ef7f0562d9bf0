//! Number formatting utilities for human-readable display.
//!
//! Operates on already-rendered decimal strings. For rounding `Decimal`
//! values, use the `decimal` sibling module.

/// Adds thousands separators to a plain decimal string.
///
/// `"-1234567.5"` becomes `"-1,234,567.5"`. The fractional part is left as-is.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let grouped = integer_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_small() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("999.99"), "999.99");
    }

    #[test]
    fn test_group_thousands_separators() {
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("65000.00"), "65,000.00");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1300000000000"), "1,300,000,000,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1"), "-1");
        assert_eq!(group_thousands("-1234.56"), "-1,234.56");
        assert_eq!(group_thousands("-123456"), "-123,456");
    }
}
