//! Calendar-day helpers for login tracking.
//!
//! Dates are persisted as ISO `YYYY-MM-DD`. Older records written with a US
//! locale (`M/D/YYYY`) are still readable.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";
const US_LOCALE_FORMAT: &str = "%m/%d/%Y";

/// Parse a stored login date in either ISO or US locale form.
pub fn parse_login_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, US_LOCALE_FORMAT))
        .ok()
}

/// Whole calendar days from `earlier` to `later`. Negative if `later` precedes `earlier`.
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Serde adapter for an optional login date field.
pub mod login_date {
    use super::{parse_login_date, ISO_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Write the date as ISO text, or `null` when absent.
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(ISO_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Read ISO or US locale text; `null` and empty strings mean no login yet.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_login_date(text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unrecognized login date '{text}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_and_locale_forms() {
        assert_eq!(parse_login_date("2026-10-18"), Some(day(2026, 10, 18)));
        assert_eq!(parse_login_date("10/18/2026"), Some(day(2026, 10, 18)));
        assert_eq!(parse_login_date("1/5/2026"), Some(day(2026, 1, 5)));
        assert_eq!(parse_login_date("yesterday"), None);
    }

    #[test]
    fn test_days_between_crosses_month_and_dst() {
        assert_eq!(days_between(day(2026, 11, 1), day(2026, 10, 31)), 1);
        // US DST ends 2026-11-01; calendar arithmetic is unaffected.
        assert_eq!(days_between(day(2026, 11, 2), day(2026, 10, 31)), 2);
        assert_eq!(days_between(day(2026, 10, 17), day(2026, 10, 18)), -1);
        assert_eq!(days_between(day(2026, 10, 18), day(2026, 10, 18)), 0);
    }
}
