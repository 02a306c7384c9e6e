//! Text formatting for record fields

use chrono::NaiveDateTime;

/// Format a price with exactly two decimals: 1.0 → "1.00"
pub fn price_text(value: Option<f64>) -> Option<String> {
    value.map(|v| format!("{:.2}", v))
}

/// Format a day-over-day change. A zero change renders as `None`, same as an
/// unset one.
pub fn change_text(change: Option<f64>) -> Option<String> {
    change.filter(|c| *c != 0.0).map(|c| format!("{:.2}", c))
}

/// ISO-8601 local timestamp with second precision: "2020-01-01T00:00:00"
pub fn date_text(timestamp: Option<NaiveDateTime>) -> Option<String> {
    timestamp.map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Full English weekday name: "Wednesday"
pub fn weekday_text(timestamp: Option<NaiveDateTime>) -> Option<String> {
    timestamp.map(|ts| ts.format("%A").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_price_two_decimals() {
        assert_eq!(price_text(Some(1.0)), Some("1.00".to_string()));
        assert_eq!(price_text(Some(47123.456)), Some("47123.46".to_string()));
        assert_eq!(price_text(Some(0.1)), Some("0.10".to_string()));
        assert_eq!(price_text(Some(-3.14159)), Some("-3.14".to_string()));
    }

    #[test]
    fn test_price_always_two_fraction_digits() {
        for v in [0.0, 1.5, 2.004, 99.999, 1234567.0, -0.5] {
            let text = price_text(Some(v)).unwrap();
            let (_, frac) = text.split_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{}", text);
        }
    }

    #[test]
    fn test_price_exact_ties_round_half_to_even() {
        // 0.125 and 0.375 are exact in binary, so these are true ties
        assert_eq!(price_text(Some(0.125)), Some("0.12".to_string()));
        assert_eq!(price_text(Some(0.375)), Some("0.38".to_string()));
        assert_eq!(price_text(Some(-0.125)), Some("-0.12".to_string()));
    }

    #[test]
    fn test_price_rounds_binary_value() {
        // 2.675 is stored slightly below the decimal literal
        assert_eq!(price_text(Some(2.675)), Some("2.67".to_string()));
    }

    #[test]
    fn test_price_unset() {
        assert_eq!(price_text(None), None);
    }

    #[test]
    fn test_change_zero_is_none() {
        assert_eq!(change_text(Some(0.0)), None);
        assert_eq!(change_text(None), None);
    }

    #[test]
    fn test_change_nonzero() {
        assert_eq!(change_text(Some(1.0)), Some("1.00".to_string()));
        assert_eq!(change_text(Some(-12.5)), Some("-12.50".to_string()));
    }

    #[test]
    fn test_change_rounding_to_zero_still_rendered() {
        // Only an exact zero is dropped
        assert_eq!(change_text(Some(0.001)), Some("0.00".to_string()));
    }

    #[test]
    fn test_date_text() {
        assert_eq!(
            date_text(Some(ts(2020, 1, 2, 3, 4, 5))),
            Some("2020-01-02T03:04:05".to_string())
        );
        assert_eq!(date_text(None), None);
    }

    #[test]
    fn test_weekday_text() {
        assert_eq!(
            weekday_text(Some(ts(2020, 1, 1, 0, 0, 0))),
            Some("Wednesday".to_string())
        );
        assert_eq!(
            weekday_text(Some(ts(2020, 1, 2, 0, 0, 0))),
            Some("Thursday".to_string())
        );
    }
}
