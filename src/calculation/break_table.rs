//! Break entitlement bracket table.
//!
//! Raw elapsed shift time is never paid as-is: it is rounded up to one of a
//! fixed set of brackets, each carrying a paid duration and a mandated
//! unpaid break.

use serde::Serialize;

use crate::models::WorkDuration;

/// One row of the break entitlement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakBracket {
    /// Inclusive upper bound on raw minutes, or `None` for the open bracket.
    pub max_raw_minutes: Option<u32>,
    /// Paid minutes for shifts in this bracket.
    pub paid_minutes: u32,
    /// Break minutes for shifts in this bracket.
    pub break_minutes: u32,
}

impl BreakBracket {
    const fn bounded(max_raw_minutes: u32, paid_minutes: u32, break_minutes: u32) -> Self {
        Self {
            max_raw_minutes: Some(max_raw_minutes),
            paid_minutes,
            break_minutes,
        }
    }

    /// The paid/break pair this bracket yields.
    pub fn work_duration(&self) -> WorkDuration {
        WorkDuration::from_parts(self.paid_minutes, self.break_minutes)
    }
}

/// The bracket applied to any shift longer than the last bounded row.
pub const OPEN_BRACKET: BreakBracket = BreakBracket {
    max_raw_minutes: None,
    paid_minutes: 780,
    break_minutes: 120,
};

/// Bounded brackets in ascending order of `max_raw_minutes`.
pub const BREAK_TABLE: [BreakBracket; 12] = [
    BreakBracket::bounded(180, 180, 0),
    BreakBracket::bounded(240, 240, 0),
    BreakBracket::bounded(300, 270, 30),
    BreakBracket::bounded(360, 330, 30),
    BreakBracket::bounded(420, 375, 45),
    BreakBracket::bounded(480, 420, 60),
    BreakBracket::bounded(540, 480, 60),
    BreakBracket::bounded(600, 525, 75),
    BreakBracket::bounded(660, 570, 90),
    BreakBracket::bounded(720, 630, 90),
    BreakBracket::bounded(780, 675, 105),
    BreakBracket::bounded(840, 720, 120),
];

/// Finds the bracket for a raw elapsed minute count.
///
/// Picks the first bracket whose upper bound is `>= raw_minutes`; anything
/// past the last bound falls into [`OPEN_BRACKET`].
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::lookup_bracket;
///
/// assert_eq!(lookup_bracket(180).paid_minutes, 180);
/// assert_eq!(lookup_bracket(181).paid_minutes, 240);
/// assert_eq!(lookup_bracket(2000).paid_minutes, 780);
/// ```
pub fn lookup_bracket(raw_minutes: u32) -> &'static BreakBracket {
    BREAK_TABLE
        .iter()
        .find(|bracket| {
            bracket
                .max_raw_minutes
                .is_some_and(|max| raw_minutes <= max)
        })
        .unwrap_or(&OPEN_BRACKET)
}
