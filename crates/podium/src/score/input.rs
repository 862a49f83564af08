use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Date key format used by the store
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a count argument (`n`). Negative values are accepted and simply match nothing.
pub fn parse_count(value: &str) -> Result<i64> {
    parse_integer("n", value)
}

/// Parse a user id argument
pub fn parse_user_id(value: &str) -> Result<i64> {
    parse_integer("user_id", value)
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        Error::invalid_argument(format!("date must be YYYY-MM-DD, got {:?}: {}", value, e))
    })
}

fn parse_integer(name: &str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        Error::invalid_argument(format!("{} must be an integer, got {:?}", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count(" 0 ").unwrap(), 0);
        assert_eq!(parse_count("-2").unwrap(), -2);
    }

    #[test]
    fn test_parse_count_rejects_non_numeric() {
        assert!(parse_count("three").unwrap_err().is_invalid_argument());
        assert!(parse_count("1.5").unwrap_err().is_invalid_argument());
        assert!(parse_count("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(parse_user_id("42; DROP TABLE scores").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        assert!(parse_date("2024-13-01").unwrap_err().is_invalid_argument());
        assert!(parse_date("01/01/2024").unwrap_err().is_invalid_argument());
        assert!(parse_date("yesterday").unwrap_err().is_invalid_argument());
    }
}
