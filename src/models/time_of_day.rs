//! Wall-clock time model.
//!
//! This module defines [`TimeOfDay`], an hour/minute pair without a date or
//! timezone, exchanged with collaborators as an `HH:mm` string.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in one nominal day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with hour (0-23) and minute (0-59) components.
///
/// Seconds are never carried; parsing accepts exactly `H:mm` or `HH:mm`.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::TimeOfDay;
///
/// let time: TimeOfDay = "09:30".parse().unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.elapsed_minutes(), 570);
/// assert_eq!(time.to_string(), "09:30");
///
/// assert!("24:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses an `HH:mm` string.
    pub fn parse(value: &str) -> EngineResult<Self> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self)
            .map_err(|e| EngineError::InvalidTimeOfDay {
                value: value.to_string(),
                message: e.to_string(),
            })
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn elapsed_minutes(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_padded_time() {
        let time = TimeOfDay::parse("06:05").unwrap();
        assert_eq!(time.hour(), 6);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.elapsed_minutes(), 365);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let time = TimeOfDay::parse(" 18:00 ").unwrap();
        assert_eq!(time.elapsed_minutes(), 18 * 60);
    }

    #[test]
    fn test_midnight_and_last_minute() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap().elapsed_minutes(), 0);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().elapsed_minutes(), 1439);
    }

    #[test]
    fn test_out_of_range_hour_is_rejected() {
        let result = TimeOfDay::parse("24:00");
        match result {
            Err(EngineError::InvalidTimeOfDay { value, .. }) => assert_eq!(value, "24:00"),
            other => panic!("Expected InvalidTimeOfDay, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_minute_is_rejected() {
        assert!(TimeOfDay::parse("12:60").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(TimeOfDay::parse("nine o'clock").is_err());
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("09:00:00").is_err());
    }

    #[test]
    fn test_from_hm() {
        assert_eq!(TimeOfDay::from_hm(22, 0).unwrap().to_string(), "22:00");
        assert!(TimeOfDay::from_hm(23, 60).is_none());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeOfDay::parse("7:05").unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_serde_uses_hh_mm_string() {
        let time = TimeOfDay::parse("09:30").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"09:30\"");

        let parsed: TimeOfDay = serde_json::from_str("\"21:15\"").unwrap();
        assert_eq!(parsed.elapsed_minutes(), 21 * 60 + 15);

        assert!(serde_json::from_str::<TimeOfDay>("\"99:99\"").is_err());
    }

    #[test]
    fn test_ordering_follows_clock() {
        let morning = TimeOfDay::parse("08:00").unwrap();
        let evening = TimeOfDay::parse("20:00").unwrap();
        assert!(morning < evening);
    }
}
