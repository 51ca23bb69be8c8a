//! Work-time normalization.
//!
//! This module turns a raw clock-in/clock-out pair into break-adjusted paid
//! time using the break entitlement table.

use tracing::warn;

use crate::models::{ShiftInterval, WorkDuration};

use super::break_table::lookup_bracket;

/// Computes the paid and break minutes for a raw shift interval.
///
/// `None`, empty, or whitespace-only times mean there is no shift and yield
/// [`WorkDuration::ZERO`]. A clock-out earlier than the clock-in is read as
/// crossing midnight.
///
/// Malformed times never reach the caller as an error: they are logged and
/// the shift is treated as a rest day, so a bad record renders as "no pay"
/// instead of breaking a whole schedule.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_work_duration;
/// use shift_payroll::models::WorkDuration;
///
/// let overnight = compute_work_duration(Some("22:00"), Some("06:00"));
/// assert_eq!(overnight.paid_minutes(), 420);
/// assert_eq!(overnight.break_minutes(), 60);
///
/// assert_eq!(compute_work_duration(None, Some("18:00")), WorkDuration::ZERO);
/// assert_eq!(compute_work_duration(Some("9:xx"), Some("18:00")), WorkDuration::ZERO);
/// ```
pub fn compute_work_duration(start: Option<&str>, end: Option<&str>) -> WorkDuration {
    match ShiftInterval::parse(start, end) {
        Ok(interval) => compute_interval_duration(&interval),
        Err(err) => {
            warn!(
                start = ?start,
                end = ?end,
                error = %err,
                "Malformed shift time, treating as rest day"
            );
            WorkDuration::ZERO
        }
    }
}

/// Computes the paid and break minutes for an already parsed interval.
pub fn compute_interval_duration(interval: &ShiftInterval) -> WorkDuration {
    interval
        .raw_minutes()
        .map(duration_for_raw_minutes)
        .unwrap_or(WorkDuration::ZERO)
}

/// Maps raw elapsed minutes to the bracketed paid/break pair.
pub fn duration_for_raw_minutes(raw_minutes: u32) -> WorkDuration {
    lookup_bracket(raw_minutes).work_duration()
}
