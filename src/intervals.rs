//! Time-interval catalog for price charting.
//!
//! Maps the user-facing range labels (1H/24H/7D/30D) to retrieval
//! parameters: lookback span, sample granularity, and point count. The
//! catalog is fixed policy, resolved once per chart request — not
//! negotiable per call.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::error::ConfigError;

/// Named time-range preset for historical charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// Last hour, minute samples.
    OneHour,
    /// Last 24 hours, hourly samples.
    OneDay,
    /// Last 7 days, hourly samples.
    SevenDays,
    /// Last 30 days, daily samples.
    ThirtyDays,
}

/// Sample granularity requested from the history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Minute,
    Hour,
    Day,
}

impl Granularity {
    /// Value sent as the `interval` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

/// Retrieval parameters for one interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSpec {
    /// Lookback span in days (fractional for sub-day ranges).
    pub lookback_days: f64,
    /// Sample granularity.
    pub granularity: Granularity,
    /// Number of points the chart window holds.
    pub point_count: usize,
}

impl Interval {
    /// Every interval, in display order.
    pub const ALL: [Interval; 4] = [
        Interval::OneHour,
        Interval::OneDay,
        Interval::SevenDays,
        Interval::ThirtyDays,
    ];

    /// Resolve a user-facing label.
    pub fn from_label(label: &str) -> Result<Self, ConfigError> {
        match label {
            "1H" => Ok(Self::OneHour),
            "24H" => Ok(Self::OneDay),
            "7D" => Ok(Self::SevenDays),
            "30D" => Ok(Self::ThirtyDays),
            other => Err(ConfigError::UnknownInterval(other.to_string())),
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneHour => "1H",
            Self::OneDay => "24H",
            Self::SevenDays => "7D",
            Self::ThirtyDays => "30D",
        }
    }

    /// Retrieval parameters for this interval.
    pub fn spec(&self) -> IntervalSpec {
        match self {
            Self::OneHour => IntervalSpec {
                lookback_days: 0.04,
                granularity: Granularity::Minute,
                point_count: 60,
            },
            Self::OneDay => IntervalSpec {
                lookback_days: 1.0,
                granularity: Granularity::Hour,
                point_count: 24,
            },
            Self::SevenDays => IntervalSpec {
                lookback_days: 7.0,
                granularity: Granularity::Hour,
                point_count: 168,
            },
            Self::ThirtyDays => IntervalSpec {
                lookback_days: 30.0,
                granularity: Granularity::Day,
                point_count: 30,
            },
        }
    }

    /// Whether this interval receives live trade ticks.
    ///
    /// Only the shortest range streams; the others update on re-seed.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::OneHour)
    }

    /// Format a point timestamp the way the chart labels its x-axis.
    ///
    /// Sub-day ranges use the wall-clock time, 7D the weekday, 30D the
    /// calendar date.
    pub fn format_timestamp(&self, at: DateTime<Local>) -> String {
        match self {
            Self::OneHour | Self::OneDay => at.format("%H:%M").to_string(),
            Self::SevenDays => at.format("%a").to_string(),
            Self::ThirtyDays => at.format("%b %-d").to_string(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interval {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_all_labels() {
        for interval in Interval::ALL {
            let resolved = Interval::from_label(interval.label()).unwrap();
            assert_eq!(resolved, interval);

            let spec = resolved.spec();
            assert!(spec.point_count > 0);
            assert!(spec.lookback_days > 0.0);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = Interval::from_label("90D").unwrap_err();
        assert_eq!(err, ConfigError::UnknownInterval("90D".to_string()));
    }

    #[test]
    fn test_one_day_spec() {
        let spec = Interval::OneDay.spec();
        assert_eq!(spec.lookback_days, 1.0);
        assert_eq!(spec.granularity, Granularity::Hour);
        assert_eq!(spec.point_count, 24);
    }

    #[test]
    fn test_only_shortest_interval_is_live() {
        assert!(Interval::OneHour.is_live());
        assert!(!Interval::OneDay.is_live());
        assert!(!Interval::SevenDays.is_live());
        assert!(!Interval::ThirtyDays.is_live());
    }

    #[test]
    fn test_format_timestamp() {
        // Monday, 2024-01-15 14:05 local time.
        let at = Local.with_ymd_and_hms(2024, 1, 15, 14, 5, 0).unwrap();

        assert_eq!(Interval::OneHour.format_timestamp(at), "14:05");
        assert_eq!(Interval::OneDay.format_timestamp(at), "14:05");
        assert_eq!(Interval::SevenDays.format_timestamp(at), "Mon");
        assert_eq!(Interval::ThirtyDays.format_timestamp(at), "Jan 15");
    }

    #[test]
    fn test_parse_roundtrip() {
        let interval: Interval = "7D".parse().unwrap();
        assert_eq!(interval, Interval::SevenDays);
        assert_eq!(interval.to_string(), "7D");
    }
}
