//! Cell parsing for dates and numeric values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a cell as a finite real number.
///
/// JSON numbers are taken as-is; strings are trimmed and parsed. Anything else
/// (null, bool, arrays, objects) is rejected.
pub fn parse_value(cell: &Value) -> Option<f64> {
    let value = match cell {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Parse a cell as a calendar date. Time-of-day information is discarded.
pub fn parse_date(cell: &Value) -> Option<NaiveDate> {
    let Value::String(raw) = cell else {
        return None;
    };
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Bare year-month, read as the first of the month.
    if s.len() == 7 && s.as_bytes()[4] == b'-' {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn values_parse_from_numbers_and_strings() {
        assert_eq!(parse_value(&json!(50)), Some(50.0));
        assert_eq!(parse_value(&json!(12.5)), Some(12.5));
        assert_eq!(parse_value(&json!(" 7.25 ")), Some(7.25));
        assert_eq!(parse_value(&json!("-3")), Some(-3.0));
    }

    #[test]
    fn unparsable_values_are_rejected() {
        assert_eq!(parse_value(&json!("n/a")), None);
        assert_eq!(parse_value(&json!("")), None);
        assert_eq!(parse_value(&json!(null)), None);
        assert_eq!(parse_value(&json!(true)), None);
        assert_eq!(parse_value(&json!("NaN")), None);
        assert_eq!(parse_value(&json!("inf")), None);
    }

    #[test]
    fn common_date_shapes_parse() {
        assert_eq!(parse_date(&json!("2023-01-15")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("2023/01/15")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("01/15/2023")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("2023-01-15T10:30:00Z")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("2023-01-15T10:30:00")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("2023-01-15 10:30:00")), Some(date(2023, 1, 15)));
        assert_eq!(parse_date(&json!("2023-04")), Some(date(2023, 4, 1)));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert_eq!(parse_date(&json!("not a date")), None);
        assert_eq!(parse_date(&json!("2023-13-01")), None);
        assert_eq!(parse_date(&json!("2023-13")), None);
        assert_eq!(parse_date(&json!(20230101)), None);
    }
}
