//! Shift model and related types.
//!
//! This module defines [`ShiftInterval`], the typed clock-in/clock-out pair,
//! and [`ShiftRecord`], the per-day record supplied by the schedule backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

/// An ordered pair of optional clock-in and clock-out times.
///
/// `None` on either side means there is no shift on that day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Clock-in time.
    pub start: Option<TimeOfDay>,
    /// Clock-out time.
    pub end: Option<TimeOfDay>,
}

impl ShiftInterval {
    /// Creates an interval from typed times.
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    /// Parses an interval from optional `HH:mm` strings.
    ///
    /// Empty or whitespace-only strings are treated as absent. A present but
    /// malformed string is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::ShiftInterval;
    ///
    /// let interval = ShiftInterval::parse(Some("22:00"), Some("06:00")).unwrap();
    /// assert!(interval.crosses_midnight());
    /// assert_eq!(interval.raw_minutes(), Some(480));
    ///
    /// let day_off = ShiftInterval::parse(None, Some("")).unwrap();
    /// assert_eq!(day_off.raw_minutes(), None);
    ///
    /// assert!(ShiftInterval::parse(Some("9am"), Some("18:00")).is_err());
    /// ```
    pub fn parse(start: Option<&str>, end: Option<&str>) -> EngineResult<Self> {
        Ok(Self {
            start: parse_optional(start)?,
            end: parse_optional(end)?,
        })
    }

    /// Returns true if clock-out is earlier than clock-in.
    pub fn crosses_midnight(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end < start,
            _ => false,
        }
    }

    /// Unadjusted elapsed minutes between clock-in and clock-out.
    ///
    /// A clock-out earlier than the clock-in is read as the next day.
    /// Returns `None` if either side is absent.
    pub fn raw_minutes(&self) -> Option<u32> {
        let (start, end) = (self.start?, self.end?);
        let start = start.elapsed_minutes();
        let end = end.elapsed_minutes();
        if end < start {
            Some(end + MINUTES_PER_DAY - start)
        } else {
            Some(end - start)
        }
    }
}

fn parse_optional(value: Option<&str>) -> EngineResult<Option<TimeOfDay>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => TimeOfDay::parse(s).map(Some),
    }
}

/// One day of a published schedule, as supplied by the backend.
///
/// Times are kept as raw strings so a malformed value degrades to a rest
/// day during calculation instead of rejecting the whole schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Clock-in time as `HH:mm`, or null for a day off.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time as `HH:mm`, or null for a day off.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Free-text category; only the working-day label is paid.
    pub work_type: String,
    /// Whether the date is a holiday. Informational only.
    #[serde(default)]
    pub is_holiday: bool,
}

impl ShiftRecord {
    /// Returns true if this record's category is the paid working-day label.
    pub fn is_working_day(&self, working_day_label: &str) -> bool {
        self.work_type == working_day_label
    }

    /// Parses the record's times into a typed interval.
    pub fn interval(&self) -> EngineResult<ShiftInterval> {
        ShiftInterval::parse(self.start_time.as_deref(), self.end_time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn make_record(start: Option<&str>, end: Option<&str>, work_type: &str) -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            work_type: work_type.to_string(),
            is_holiday: false,
        }
    }

    /// SI-001: same-day interval
    #[test]
    fn test_same_day_raw_minutes() {
        let interval = ShiftInterval::new(Some(time("09:00")), Some(time("18:00")));
        assert!(!interval.crosses_midnight());
        assert_eq!(interval.raw_minutes(), Some(540));
    }

    /// SI-002: overnight interval
    #[test]
    fn test_overnight_raw_minutes() {
        let interval = ShiftInterval::new(Some(time("22:00")), Some(time("06:00")));
        assert!(interval.crosses_midnight());
        assert_eq!(interval.raw_minutes(), Some(480));
    }

    /// SI-003: equal start and end
    #[test]
    fn test_equal_times_are_zero_minutes() {
        let interval = ShiftInterval::new(Some(time("10:00")), Some(time("10:00")));
        assert!(!interval.crosses_midnight());
        assert_eq!(interval.raw_minutes(), Some(0));
    }

    /// SI-004: one minute before start wraps to almost a full day
    #[test]
    fn test_wrap_to_almost_full_day() {
        let interval = ShiftInterval::new(Some(time("10:00")), Some(time("09:59")));
        assert_eq!(interval.raw_minutes(), Some(1439));
    }

    #[test]
    fn test_absent_side_has_no_raw_minutes() {
        assert_eq!(ShiftInterval::new(None, Some(time("18:00"))).raw_minutes(), None);
        assert_eq!(ShiftInterval::new(Some(time("09:00")), None).raw_minutes(), None);
        assert_eq!(ShiftInterval::default().raw_minutes(), None);
    }

    #[test]
    fn test_parse_treats_blank_as_absent() {
        let interval = ShiftInterval::parse(Some("  "), Some("18:00")).unwrap();
        assert_eq!(interval.start, None);
        assert_eq!(interval.end, Some(time("18:00")));
    }

    #[test]
    fn test_parse_rejects_malformed_time() {
        let result = ShiftInterval::parse(Some("09:00"), Some("18h00"));
        assert!(matches!(result, Err(EngineError::InvalidTimeOfDay { .. })));
    }

    #[test]
    fn test_record_working_day_label() {
        let record = make_record(Some("09:00"), Some("18:00"), "勤務");
        assert!(record.is_working_day("勤務"));
        assert!(!record.is_working_day("休み"));
    }

    #[test]
    fn test_record_interval() {
        let record = make_record(Some("22:00"), Some("06:00"), "勤務");
        assert_eq!(record.interval().unwrap().raw_minutes(), Some(480));
    }

    #[test]
    fn test_record_deserialization_with_nulls() {
        let json = r#"{
            "date": "2026-10-05",
            "start_time": null,
            "end_time": null,
            "work_type": "休み"
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time, None);
        assert!(!record.is_holiday);
    }

    #[test]
    fn test_record_deserialization_keeps_malformed_time_text() {
        let json = r#"{
            "date": "2026-10-06",
            "start_time": "not-a-time",
            "end_time": "18:00",
            "work_type": "勤務",
            "is_holiday": true
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.start_time.as_deref(), Some("not-a-time"));
        assert!(record.is_holiday);
        assert!(record.interval().is_err());
    }
}
