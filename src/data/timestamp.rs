//! Timestamp parsing and time-base normalization
//!
//! Accepts a fixed set of layouts; there is no free-text guessing. Sub-second
//! and sub-minute truncation is an explicit [`TimestampPrecision`] choice.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TimestampError;

/// Date-time layouts tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts, interpreted as midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Layout used when a timestamp is written back out
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How much of the parsed time-of-day to keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPrecision {
    /// Keep everything, including fractional seconds (default)
    #[default]
    Full,
    /// Drop fractional seconds
    Seconds,
    /// Drop seconds and fractional seconds
    Minutes,
}

impl TimestampPrecision {
    /// Truncate `ts` to this precision
    pub fn apply(self, ts: NaiveDateTime) -> NaiveDateTime {
        let nanos = TimeDelta::nanoseconds(i64::from(ts.nanosecond()));
        match self {
            TimestampPrecision::Full => ts,
            TimestampPrecision::Seconds => ts - nanos,
            TimestampPrecision::Minutes => ts - nanos - TimeDelta::seconds(i64::from(ts.second())),
        }
    }
}

impl fmt::Display for TimestampPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimestampPrecision::Full => "full",
            TimestampPrecision::Seconds => "seconds",
            TimestampPrecision::Minutes => "minutes",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TimestampPrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(TimestampPrecision::Full),
            "seconds" | "second" | "s" => Ok(TimestampPrecision::Seconds),
            "minutes" | "minute" | "m" => Ok(TimestampPrecision::Minutes),
            other => Err(format!("unknown timestamp precision '{other}'")),
        }
    }
}

/// Parse a timestamp in one of the accepted layouts
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// - [`TimestampError::Empty`] for blank input
/// - [`TimestampError::Invalid`] carrying the trimmed literal when no layout matches
pub fn parse_timestamp(
    text: &str,
    precision: TimestampPrecision,
) -> Result<NaiveDateTime, TimestampError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimestampError::Empty);
    }

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        });

    match parsed {
        Some(ts) => Ok(precision.apply(ts)),
        None => Err(TimestampError::Invalid {
            input: text.to_string(),
        }),
    }
}

/// Hours from `reference` to `timestamp`
///
/// Fractional hours are kept; the result is negative when `timestamp` precedes
/// `reference`.
pub fn elapsed_hours(reference: NaiveDateTime, timestamp: NaiveDateTime) -> f64 {
    let delta = timestamp.signed_duration_since(reference);
    delta.num_seconds() as f64 / 3600.0 + f64::from(delta.subsec_nanos()) / 3.6e12
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn accepted_layouts() {
        let expected = ts("2025-01-01 23:48:00");
        for input in [
            "2025-01-01 23:48",
            "2025-01-01 23:48:00",
            " 2025-01-01T23:48:00 ",
            "2025-01-01T23:48",
            "2025/01/01 23:48",
            "2025/01/01 23:48:00",
        ] {
            assert_eq!(
                parse_timestamp(input, TimestampPrecision::Full).unwrap(),
                expected,
                "{input}"
            );
        }
        assert_eq!(
            parse_timestamp("2025-01-01", TimestampPrecision::Full).unwrap(),
            ts("2025-01-01 00:00:00")
        );
    }

    #[test]
    fn fractional_seconds_follow_precision() {
        let input = "2025-03-04 10:15:30.750";
        assert_eq!(
            parse_timestamp(input, TimestampPrecision::Full).unwrap(),
            ts("2025-03-04 10:15:30.750")
        );
        assert_eq!(
            parse_timestamp(input, TimestampPrecision::Seconds).unwrap(),
            ts("2025-03-04 10:15:30")
        );
        assert_eq!(
            parse_timestamp(input, TimestampPrecision::Minutes).unwrap(),
            ts("2025-03-04 10:15:00")
        );
    }

    #[test]
    fn rejects_free_text() {
        for input in ["tomorrow", "01/02/2025", "2025-13-01", "2025-01-01 25:00"] {
            assert_eq!(
                parse_timestamp(input, TimestampPrecision::Full),
                Err(TimestampError::Invalid {
                    input: input.to_string()
                })
            );
        }
        assert_eq!(
            parse_timestamp("   ", TimestampPrecision::Full),
            Err(TimestampError::Empty)
        );
    }

    #[test]
    fn elapsed_hours_signs_and_fractions() {
        let reference = ts("2025-01-01 00:00:00");
        assert_eq!(elapsed_hours(reference, reference), 0.0);
        assert_relative_eq!(elapsed_hours(reference, ts("2025-01-01 23:48:00")), 23.8);
        assert_relative_eq!(elapsed_hours(reference, ts("2024-12-31 22:30:00")), -1.5);
        assert_relative_eq!(
            elapsed_hours(reference, ts("2025-01-01 00:00:01.800")),
            1.8 / 3600.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            elapsed_hours(reference, ts("2024-12-31 23:59:58.200")),
            -1.8 / 3600.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn precision_round_trips_through_text() {
        for p in [
            TimestampPrecision::Full,
            TimestampPrecision::Seconds,
            TimestampPrecision::Minutes,
        ] {
            assert_eq!(p.to_string().parse::<TimestampPrecision>().unwrap(), p);
        }
        assert!("hours".parse::<TimestampPrecision>().is_err());
    }
}
