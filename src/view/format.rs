//! Display normalizers for snapshot fields.
//!
//! All of these are best-effort: input that does not match the expected
//! shape passes through unchanged rather than failing. The tracker feeds
//! these fields from free-form operator input, so lenience is the policy.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::model::text;

/// Reformats a tracker timestamp (`YYYYMMDDTHHMMSSZ`, UTC) as
/// `YYYY-MM-DD HH:MM:SS UTC`. Anything that is not exactly that shape,
/// or names an impossible date, is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match parse_compact_utc(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => raw.to_string(),
    }
}

/// Parses the compact `YYYYMMDDTHHMMSSZ` form. Shape is checked before
/// the date itself so `"2024-01-15"` and friends fall through cheaply.
fn parse_compact_utc(raw: &str) -> Option<NaiveDateTime> {
    let bytes = raw.as_bytes();
    if bytes.len() != 16 || bytes[8] != b'T' || bytes[15] != b'Z' {
        return None;
    }
    if !bytes[..8].iter().all(u8::is_ascii_digit) || !bytes[9..15].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let num = |range: std::ops::Range<usize>| raw[range].parse::<u32>().ok();
    let date = NaiveDate::from_ymd_opt(raw[0..4].parse().ok()?, num(4..6)?, num(6..8)?)?;
    date.and_hms_opt(num(9..11)?, num(11..13)?, num(13..15)?)
}

/// Renders a status code for display. The tracker defines two named
/// codes (4 = ok, 6 = not ok); every other number renders as itself and
/// non-numeric input passes through as text.
pub fn format_status_code(code: &Value) -> String {
    if matches!(code, Value::Null) {
        return String::new();
    }
    if matches!(code, Value::String(s) if s.is_empty()) {
        return String::new();
    }

    let numeric = match code {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match numeric {
        Some(n) if n == 4.0 => "4 - ok".to_string(),
        Some(n) if n == 6.0 => "6 - not ok".to_string(),
        Some(n) => number_text(n),
        None => text(code),
    }
}

/// Renders a location status for display. A `"percentage N%"` value
/// collapses to just the percentage token; empty-ish input (null, empty
/// string, numeric zero, false) renders empty. The tracker never emits
/// numeric zero here, but the original renderer treated it as empty and
/// that behavior is kept.
pub fn format_location_status(value: &Value) -> String {
    let empty_ish = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    };
    if empty_ish {
        return String::new();
    }

    let s = text(value);
    if let Some(rest) = s.strip_prefix("percentage ") {
        // Second whitespace-delimited token; whole string when absent.
        return match rest.split_whitespace().next() {
            Some(token) => token.to_string(),
            None => s,
        };
    }
    s
}

fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_timestamp_compact_utc() {
        assert_eq!(
            format_timestamp("20240115T133000Z"),
            "2024-01-15 13:30:00 UTC"
        );
        assert_eq!(
            format_timestamp("20240101T000000Z"),
            "2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp(""), "");
        // Already formatted stays as-is.
        assert_eq!(
            format_timestamp("2024-01-15 13:30:00 UTC"),
            "2024-01-15 13:30:00 UTC"
        );
        // Right shape, impossible date.
        assert_eq!(format_timestamp("20241345T133000Z"), "20241345T133000Z");
        assert_eq!(format_timestamp("20240115T250000Z"), "20240115T250000Z");
    }

    #[test]
    fn test_format_status_code_named_values() {
        assert_eq!(format_status_code(&json!(4)), "4 - ok");
        assert_eq!(format_status_code(&json!(6)), "6 - not ok");
        // String-typed codes coerce the same way.
        assert_eq!(format_status_code(&json!("4")), "4 - ok");
        assert_eq!(format_status_code(&json!("6")), "6 - not ok");
    }

    #[test]
    fn test_format_status_code_other_numbers() {
        assert_eq!(format_status_code(&json!(7)), "7");
        assert_eq!(format_status_code(&json!("7")), "7");
        assert_eq!(format_status_code(&json!(7.5)), "7.5");
    }

    #[test]
    fn test_format_status_code_empty_and_non_numeric() {
        assert_eq!(format_status_code(&json!("")), "");
        assert_eq!(format_status_code(&Value::Null), "");
        // Free-form operator input passes through.
        assert_eq!(format_status_code(&json!("None")), "None");
        assert_eq!(format_status_code(&json!("4 - ok")), "4 - ok");
    }

    #[test]
    fn test_format_location_status_percentage() {
        assert_eq!(format_location_status(&json!("percentage 60%")), "60%");
        assert_eq!(format_location_status(&json!("percentage 100%")), "100%");
        // No second token: fall back to the whole string.
        assert_eq!(
            format_location_status(&json!("percentage")),
            "percentage"
        );
        assert_eq!(
            format_location_status(&json!("percentage ")),
            "percentage "
        );
    }

    #[test]
    fn test_format_location_status_passthrough() {
        assert_eq!(format_location_status(&json!("arrived")), "arrived");
        assert_eq!(format_location_status(&json!("complete")), "complete");
    }

    #[test]
    fn test_format_location_status_empty_ish() {
        assert_eq!(format_location_status(&Value::Null), "");
        assert_eq!(format_location_status(&json!("")), "");
        // Zero is falsy in the original renderer; preserved.
        assert_eq!(format_location_status(&json!(0)), "");
        assert_eq!(format_location_status(&json!(false)), "");
        // Non-zero numbers are not.
        assert_eq!(format_location_status(&json!(3)), "3");
    }
}
