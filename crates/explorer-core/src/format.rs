//! Locale-invariant display formatting for chain values.
//!
//! None of these functions fail: anything missing or unparsable renders as
//! [`PLACEHOLDER`].

use chrono::{DateTime, Utc};
use cspr_cloud::Amount;
use std::fmt::Display;

/// Rendered in place of missing values
pub const PLACEHOLDER: &str = "N/A";

/// 1 CSPR = 10^9 motes
pub const MOTES_PER_CSPR: u128 = 1_000_000_000;

/// Anything that may hold a mote amount
pub trait MotesSource {
    fn motes(&self) -> Option<u128>;
}

impl MotesSource for u64 {
    fn motes(&self) -> Option<u128> {
        Some(u128::from(*self))
    }
}

impl MotesSource for u128 {
    fn motes(&self) -> Option<u128> {
        Some(*self)
    }
}

impl MotesSource for str {
    fn motes(&self) -> Option<u128> {
        self.trim().parse().ok()
    }
}

impl MotesSource for String {
    fn motes(&self) -> Option<u128> {
        self.as_str().motes()
    }
}

impl MotesSource for Amount {
    fn motes(&self) -> Option<u128> {
        Amount::motes(self)
    }
}

impl<T: MotesSource + ?Sized> MotesSource for &T {
    fn motes(&self) -> Option<u128> {
        (**self).motes()
    }
}

impl<T: MotesSource> MotesSource for Option<T> {
    fn motes(&self) -> Option<u128> {
        self.as_ref().and_then(|value| value.motes())
    }
}

/// Convert motes to CSPR with exactly 9 fractional digits, e.g.
/// `1_500_000_000_000` -> `"1,500.000000000 CSPR"`. Integer arithmetic only.
pub fn motes_to_cspr(value: impl MotesSource) -> String {
    match value.motes() {
        Some(motes) => format!(
            "{}.{:09} CSPR",
            group_thousands(motes / MOTES_PER_CSPR),
            motes % MOTES_PER_CSPR
        ),
        None => PLACEHOLDER.to_string(),
    }
}

/// `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Two fractional digits and a `%` sign
pub fn format_percentage(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_hash(hash: Option<&str>) -> String {
    match hash {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Thousands-grouped integer
pub fn format_count(value: Option<u64>) -> String {
    value
        .map(|v| group_thousands(u128::from(v)))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Scores and prices: at most 4 fractional digits, trailing zeros dropped
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let fixed = format!("{:.4}", v);
            let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Raw token amount as reported upstream (token decimals vary per contract)
pub fn format_amount(value: Option<&Amount>) -> String {
    or_na(value.map(Amount::as_str))
}

/// Text value or the placeholder. Empty strings are kept as they are.
pub fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

/// Displayable value or a fixed fallback
pub fn display_or<T: Display>(value: Option<T>, fallback: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_motes_to_cspr() {
        assert_eq!(motes_to_cspr(1_000_000_000u64), "1.000000000 CSPR");
        assert_eq!(motes_to_cspr(0u64), "0.000000000 CSPR");
        assert_eq!(motes_to_cspr(500_000_000u64), "0.500000000 CSPR");
        assert_eq!(motes_to_cspr(1_500_000_000_000u64), "1,500.000000000 CSPR");
        assert_eq!(motes_to_cspr(1u64), "0.000000001 CSPR");
    }

    #[test]
    fn test_motes_to_cspr_beyond_u64() {
        let motes: u128 = 98_765_432_101_234_567_890_123;
        assert_eq!(motes_to_cspr(motes), "98,765,432,101,234.567890123 CSPR");
    }

    #[test]
    fn test_motes_to_cspr_from_text() {
        assert_eq!(motes_to_cspr("2500000000"), "2.500000000 CSPR");
        assert_eq!(motes_to_cspr(""), PLACEHOLDER);
        assert_eq!(motes_to_cspr("not_a_number"), PLACEHOLDER);
        assert_eq!(motes_to_cspr("-5"), PLACEHOLDER);
        assert_eq!(motes_to_cspr(None::<u64>), PLACEHOLDER);

        let amount = Amount::new("1000000000000");
        assert_eq!(motes_to_cspr(Some(&amount)), "1,000.000000000 CSPR");
    }

    #[test]
    fn test_format_timestamp() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
        assert_eq!(format_timestamp(Some(&t)), "2024-01-15 10:30:45 UTC");
        assert_eq!(format_timestamp(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(5.55)), "5.55%");
        assert_eq!(format_percentage(Some(100.0)), "100.00%");
        assert_eq!(format_percentage(Some(0.0)), "0.00%");
        assert_eq!(format_percentage(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_hash() {
        assert_eq!(format_hash(None), PLACEHOLDER);
        assert_eq!(format_hash(Some("")), PLACEHOLDER);
        assert_eq!(format_hash(Some("abc123")), "abc123");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(1_000_000)), "1,000,000");
        assert_eq!(format_count(Some(999)), "999");
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "Yes");
        assert_eq!(format_bool(false), "No");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(0.98766)), "0.9877");
        assert_eq!(format_score(Some(1.0)), "1");
        assert_eq!(format_score(Some(0.5)), "0.5");
        assert_eq!(format_score(None), PLACEHOLDER);
    }

    #[test]
    fn test_text_fallbacks() {
        assert_eq!(or_na(None), PLACEHOLDER);
        assert_eq!(or_na(Some("pending")), "pending");
        assert_eq!(display_or(Some(42u64), PLACEHOLDER), "42");
        assert_eq!(display_or(None::<u64>, "0"), "0");
        assert_eq!(format_amount(Some(&Amount::new("12345"))), "12345");
        assert_eq!(format_amount(None), PLACEHOLDER);
    }
}
