//! Paid work duration model.
//!
//! This module defines [`WorkDuration`], the break-adjusted result of
//! normalizing a shift interval.

use std::fmt;

use serde::Serialize;

/// Break-adjusted paid time and mandated break time for one shift.
///
/// Values are only produced by the work-time calculator (see
/// [`compute_work_duration`](crate::calculation::compute_work_duration));
/// callers can read them but not build arbitrary ones. The only public
/// value is [`WorkDuration::ZERO`], the result for a rest day.
///
/// The `Display` form is `HH:mm (+Nm)`: paid time as zero-padded hours and
/// minutes, followed by break minutes.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_work_duration;
/// use shift_payroll::models::WorkDuration;
///
/// let duration = compute_work_duration(Some("09:00"), Some("18:00"));
/// assert_eq!(duration.paid_minutes(), 480);
/// assert_eq!(duration.break_minutes(), 60);
/// assert_eq!(duration.to_string(), "08:00 (+60m)");
///
/// assert_eq!(WorkDuration::ZERO.to_string(), "00:00 (+0m)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WorkDuration {
    paid_minutes: u32,
    break_minutes: u32,
}

impl WorkDuration {
    /// The duration of a day without a shift.
    pub const ZERO: WorkDuration = WorkDuration {
        paid_minutes: 0,
        break_minutes: 0,
    };

    pub(crate) const fn from_parts(paid_minutes: u32, break_minutes: u32) -> Self {
        Self {
            paid_minutes,
            break_minutes,
        }
    }

    /// Paid (break-adjusted) minutes used for wage computation.
    pub fn paid_minutes(&self) -> u32 {
        self.paid_minutes
    }

    /// Mandated unpaid break minutes.
    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Returns true for the rest-day duration.
    pub fn is_zero(&self) -> bool {
        self.paid_minutes == 0 && self.break_minutes == 0
    }

    /// Paid time split into whole hours and remaining minutes.
    pub fn paid_hours_and_minutes(&self) -> (u32, u32) {
        (self.paid_minutes / 60, self.paid_minutes % 60)
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = self.paid_hours_and_minutes();
        write!(f, "{:02}:{:02} (+{}m)", hours, minutes, self.break_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(WorkDuration::default(), WorkDuration::ZERO);
        assert!(WorkDuration::ZERO.is_zero());
    }

    #[test]
    fn test_display_pads_hours_and_minutes() {
        let duration = WorkDuration::from_parts(375, 45);
        assert_eq!(duration.to_string(), "06:15 (+45m)");
    }

    #[test]
    fn test_display_longest_bracket() {
        let duration = WorkDuration::from_parts(780, 120);
        assert_eq!(duration.to_string(), "13:00 (+120m)");
    }

    #[test]
    fn test_paid_hours_and_minutes() {
        let duration = WorkDuration::from_parts(525, 75);
        assert_eq!(duration.paid_hours_and_minutes(), (8, 45));
    }

    #[test]
    fn test_serializes_structured_fields() {
        let duration = WorkDuration::from_parts(420, 60);
        let json = serde_json::to_value(duration).unwrap();
        assert_eq!(json["paid_minutes"], 420);
        assert_eq!(json["break_minutes"], 60);
    }
}
