//! Value formatting shared by the table and report exporters

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Timestamp layout used in report headers, e.g. `2025-03-14 09:26:53`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a number with `,` thousands separators, keeping its fraction
///
/// # Examples
///
/// ```
/// use warehouse_compare::core::export::format::format_thousands;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_thousands(Decimal::from(1_072_500)), "1,072,500");
/// assert_eq!(format_thousands(Decimal::from_str("1234.5").unwrap()), "1,234.5");
/// ```
pub fn format_thousands(value: Decimal) -> String {
    let normalized = value.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if normalized.is_sign_negative() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Format a monetary amount as `CODE 1,234.00`
pub fn format_currency(value: Decimal, currency_code: &str) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let int_value = Decimal::from_str_exact(int_part).unwrap_or_default();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    format!(
        "{currency_code} {sign}{}.{frac_part}",
        format_thousands(int_value)
    )
}

/// Format a report generation timestamp
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(0), "0"; "zero")]
    #[test_case(dec!(999), "999"; "below a thousand")]
    #[test_case(dec!(1000), "1,000"; "one thousand")]
    #[test_case(dec!(1072500), "1,072,500"; "scenario total")]
    #[test_case(dec!(1234567.891), "1,234,567.891"; "fraction kept")]
    #[test_case(dec!(150.00), "150"; "trailing zeros dropped")]
    #[test_case(dec!(-25000), "-25,000"; "negative")]
    fn test_format_thousands(value: Decimal, expected: &str) {
        assert_eq!(format_thousands(value), expected);
    }

    #[test_case(dec!(1072500), "THB 1,072,500.00"; "whole amount")]
    #[test_case(dec!(1234.5), "THB 1,234.50"; "one decimal")]
    #[test_case(dec!(0.005), "THB 0.01"; "rounds half away from zero")]
    fn test_format_currency(value: Decimal, expected: &str) {
        assert_eq!(format_currency(value, "THB"), expected);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2025-03-14 09:26:53");
    }
}
