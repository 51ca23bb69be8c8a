//! Shift preset model.
//!
//! Presets are named, colored time templates employees pick from when
//! submitting shift requests.

use serde::{Deserialize, Serialize};

use crate::calculation::compute_work_duration;

use super::shift::ShiftInterval;
use super::work_duration::WorkDuration;

/// A reusable shift template.
///
/// Deserializes from both the backend's snake_case fields and the
/// camelCase `startTime`/`endTime` form.
///
/// # Example
///
/// ```
/// use shift_payroll::models::Preset;
///
/// let preset: Preset = serde_json::from_str(r##"{
///     "id": "1",
///     "title": "Early",
///     "color": "#FF5733",
///     "startTime": "09:00",
///     "endTime": "18:00"
/// }"##).unwrap();
///
/// assert_eq!(preset.work_duration().paid_minutes(), 480);
/// assert!(!preset.system);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Backend identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display color as a hex string.
    pub color: String,
    /// Clock-in time as `HH:mm`.
    #[serde(alias = "startTime")]
    pub start_time: String,
    /// Clock-out time as `HH:mm`.
    #[serde(alias = "endTime")]
    pub end_time: String,
    /// Built-in presets cannot be edited or deleted.
    #[serde(default)]
    pub system: bool,
}

impl Preset {
    /// Returns true for the `00:00`-`00:00` rest preset and for presets with
    /// a blank time.
    ///
    /// Any other equal pair, such as `09:00`-`09:00`, is a working preset.
    pub fn is_rest(&self) -> bool {
        match ShiftInterval::parse(Some(&self.start_time), Some(&self.end_time)) {
            Ok(ShiftInterval {
                start: Some(start),
                end: Some(end),
            }) => start.elapsed_minutes() == 0 && end.elapsed_minutes() == 0,
            Ok(_) => true,
            Err(_) => false,
        }
    }

    /// Previews the paid and break time a shift on this preset would earn.
    pub fn work_duration(&self) -> WorkDuration {
        if self.is_rest() {
            return WorkDuration::ZERO;
        }
        compute_work_duration(Some(&self.start_time), Some(&self.end_time))
    }
}
