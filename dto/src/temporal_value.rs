use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date as it may be stored alongside a membership.
///
/// Stored dates come in several shapes: the store's own timestamp type, a plain string, or a
/// native date. Every business rule works on [TemporalValue::to_local_date] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemporalValue {
    /// Local wall-clock date and time.
    NativeDate(NaiveDateTime),
    IsoString(String),
    StoreTimestamp(DateTime<Utc>),
    /// A stored value that can't stand for any date, kept as text for the logs.
    Unreadable(String),
}

impl TemporalValue {
    /// Build a native date from milliseconds since the Unix epoch. Out of range values are
    /// unreadable.
    pub fn from_epoch_millis(millis: i64) -> Self {
        DateTime::from_timestamp_millis(millis)
            .map(|instant| Self::NativeDate(instant.with_timezone(&Local).naive_local()))
            .unwrap_or_else(|| Self::Unreadable(millis.to_string()))
    }

    /// Calendar day of this value in the local timezone, if it represents a valid date.
    pub fn to_local_date(&self) -> Option<NaiveDate> {
        match self {
            TemporalValue::NativeDate(date_time) => Some(date_time.date()),
            TemporalValue::StoreTimestamp(instant) => {
                Some(instant.with_timezone(&Local).date_naive())
            }
            TemporalValue::IsoString(value) => parse_local_date(value.trim()),
            TemporalValue::Unreadable(_) => None,
        }
    }

    /// Whether this value counts as "no date at all", i.e. an empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, TemporalValue::IsoString(value) if value.trim().is_empty())
    }
}

fn parse_local_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Local).date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
        .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, TimeZone};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {
            "2025-03-05",
            "  2025-03-05  ",
            "2025-03-05T23:59:59",
            "2025-03-05T08:30",
            "2025-03-05 12:00:00.250",
        },
        expected_result = {
            (2025, 3, 5),
            (2025, 3, 5),
            (2025, 3, 5),
            (2025, 3, 5),
            (2025, 3, 5),
        }
    )]
    fn should_convert_iso_string_to_local_date(value: &str, expected_result: (i32, u32, u32)) {
        let (year, month, day) = expected_result;
        let temporal_value = TemporalValue::IsoString(value.to_owned());
        assert_eq!(
            NaiveDate::from_ymd_opt(year, month, day),
            temporal_value.to_local_date()
        );
    }

    #[parameterized(value = {"", "not a date", "2025-13-45", "05/03/2025", "tomorrow"})]
    fn should_not_convert_malformed_iso_string(value: &str) {
        let temporal_value = TemporalValue::IsoString(value.to_owned());
        assert_eq!(None, temporal_value.to_local_date());
    }

    #[test]
    fn should_convert_rfc3339_string_in_local_timezone() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
        let temporal_value = TemporalValue::IsoString(instant.to_rfc3339());
        assert_eq!(
            Some(instant.with_timezone(&Local).date_naive()),
            temporal_value.to_local_date()
        );
    }

    #[test]
    fn should_convert_store_timestamp_in_local_timezone() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let temporal_value = TemporalValue::StoreTimestamp(instant);
        assert_eq!(
            Some(instant.with_timezone(&Local).date_naive()),
            temporal_value.to_local_date()
        );
    }

    #[test]
    fn should_ignore_time_of_native_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let temporal_value =
            TemporalValue::NativeDate(date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
        assert_eq!(Some(date), temporal_value.to_local_date());
    }

    #[test]
    fn should_build_native_date_from_epoch_millis() {
        let now = Local::now();
        let temporal_value = TemporalValue::from_epoch_millis(now.timestamp_millis());
        assert_eq!(Some(now.date_naive()), temporal_value.to_local_date());

        let tomorrow = now + Duration::days(1);
        let temporal_value = TemporalValue::from_epoch_millis(tomorrow.timestamp_millis());
        assert_eq!(Some(tomorrow.date_naive()), temporal_value.to_local_date());
    }

    #[parameterized(millis = {i64::MAX, i64::MIN})]
    fn should_not_convert_out_of_range_epoch_millis(millis: i64) {
        let temporal_value = TemporalValue::from_epoch_millis(millis);

        assert_eq!(TemporalValue::Unreadable(millis.to_string()), temporal_value);
        assert_eq!(None, temporal_value.to_local_date());
        assert!(!temporal_value.is_blank());
    }

    #[parameterized(
        value = {"", "   ", "2025-03-05", "oops"},
        expected_result = {true, true, false, false}
    )]
    fn should_detect_blank_value(value: &str, expected_result: bool) {
        assert_eq!(
            expected_result,
            TemporalValue::IsoString(value.to_owned()).is_blank()
        );
    }
}
