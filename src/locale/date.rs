//! Localization of the feed's free-text update timestamp.

use chrono::{Datelike, NaiveDateTime, Timelike};
use thiserror::Error;
use tracing::warn;

use super::jalali::gregorian_to_jalali;
use super::{to_persian_digits, PERSIAN_MONTHS};

/// Errors from update-timestamp localization.
#[derive(Error, Debug)]
pub enum DateError {
    #[error("failed to parse timestamp '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("month {0} out of range after calendar conversion")]
    MonthOutOfRange(u32),
}

/// Prefix the feed puts in front of the timestamp.
const UPDATE_PREFIX: &str = "last update : ";

/// Timestamp layout after the prefix, e.g. `18:55 24 March 2025`.
const UPDATE_FORMAT: &str = "%H:%M %d %B %Y";

/// Localize `"last update : HH:MM DD MonthName YYYY"` into a Jalali date
/// with Persian digits and month name, e.g. `۱۸:۵۵ ۴ فروردین ۱۴۰۴`.
pub fn try_localize_update_time(label: &str) -> Result<String, DateError> {
    let date_part = label.strip_prefix(UPDATE_PREFIX).unwrap_or(label);

    let dt = NaiveDateTime::parse_from_str(date_part, UPDATE_FORMAT).map_err(|source| {
        DateError::Parse {
            input: label.to_string(),
            source,
        }
    })?;

    let (jy, jm, jd) = gregorian_to_jalali(dt.year(), dt.month(), dt.day());
    let month = PERSIAN_MONTHS
        .get((jm - 1) as usize)
        .ok_or(DateError::MonthOutOfRange(jm))?;

    let time = to_persian_digits(&format!("{:02}:{:02}", dt.hour(), dt.minute()));
    let day = to_persian_digits(&jd.to_string());
    let year = to_persian_digits(&jy.to_string());

    Ok(format!("{time} {day} {month} {year}"))
}

/// Fail-soft variant: a timestamp that does not match the expected shape
/// is returned unchanged so report generation never aborts on it.
#[must_use]
pub fn localize_update_time(label: &str) -> String {
    match try_localize_update_time(label) {
        Ok(localized) => localized,
        Err(e) => {
            warn!(error = %e, "Falling back to raw update timestamp");
            label.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localizes_known_timestamp() {
        let out = try_localize_update_time("last update : 18:55 24 March 2025").unwrap();
        assert_eq!(out, "۱۸:۵۵ ۴ فروردین ۱۴۰۴");
    }

    #[test]
    fn accepts_label_without_prefix() {
        let out = try_localize_update_time("09:05 21 December 2024").unwrap();
        assert_eq!(out, "۰۹:۰۵ ۱ دی ۱۴۰۳");
    }

    #[test]
    fn garbage_passes_through_unchanged() {
        assert_eq!(localize_update_time("garbage"), "garbage");
        assert_eq!(localize_update_time(""), "");
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        assert!(matches!(
            try_localize_update_time("last update : 2025-03-24T18:55:00Z"),
            Err(DateError::Parse { .. })
        ));
    }
}
