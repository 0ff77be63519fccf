//! Day labels for the forecast list

use chrono::{Locale, NaiveDate, NaiveTime};

use crate::{Result, WeatherError};

pub const TODAY_LABEL: &str = "Today";

/// Parse a POSIX locale name such as `en_US` or `de_DE`
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name)
        .map_err(|_| WeatherError::config(format!("Unknown locale '{name}'")))
}

/// `Today` for the current day, otherwise the abbreviated weekday name in
/// the given locale. The calendar date is used as-is, no timezone shift.
#[must_use]
pub fn day_label(date: NaiveDate, is_today: bool, locale: Locale) -> String {
    if is_today {
        return TODAY_LABEL.to_string();
    }
    date.and_time(NaiveTime::default())
        .and_utc()
        .format_localized("%a", locale)
        .to_string()
}

/// Like [`day_label`] but for a `YYYY-MM-DD` string as served by the API.
/// Today's label never looks at the date.
pub fn label_for(date: &str, is_today: bool, locale: Locale) -> Result<String> {
    if is_today {
        return Ok(TODAY_LABEL.to_string());
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| WeatherError::network(format!("invalid date '{date}': {e}")))?;
    Ok(day_label(parsed, false, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_label_ignores_date() {
        assert_eq!(label_for("2024-01-01", true, Locale::en_US).unwrap(), "Today");
        assert_eq!(label_for("not a date", true, Locale::en_US).unwrap(), "Today");
    }

    #[test]
    fn test_weekday_label() {
        // 2024-01-01 was a Monday
        assert_eq!(label_for("2024-01-01", false, Locale::en_US).unwrap(), "Mon");
        assert_eq!(label_for("2024-01-06", false, Locale::en_US).unwrap(), "Sat");
    }

    #[test]
    fn test_weekday_label_is_localized() {
        assert_eq!(label_for("2024-01-01", false, Locale::de_DE).unwrap(), "Mo");
    }

    #[test]
    fn test_label_is_stable() {
        let first = label_for("2024-03-15", false, Locale::en_US).unwrap();
        let second = label_for("2024-03-15", false, Locale::en_US).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "Fri");
    }

    #[test]
    fn test_invalid_date() {
        assert!(label_for("2024-13-01", false, Locale::en_US).is_err());
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale("en_US").unwrap(), Locale::en_US);
        assert!(parse_locale("klingon").is_err());
    }
}
