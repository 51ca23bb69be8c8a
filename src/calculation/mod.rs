//! Calculation logic for the Shift Payroll Engine.
//!
//! This module contains the break entitlement table, work-time
//! normalization, salary rounding, per-day shift pay with its audit trail,
//! and monthly aggregation.

mod break_table;
mod monthly_summary;
mod salary;
mod schedule;
mod shift_pay;
mod work_time;

pub use break_table::{BREAK_TABLE, BreakBracket, OPEN_BRACKET, lookup_bracket};
pub use monthly_summary::summarize_month;
pub use salary::compute_salary;
pub use schedule::calculate_schedule;
pub use shift_pay::{MALFORMED_TIME_WARNING, ShiftPayResult, calculate_shift_pay};
pub use work_time::{compute_interval_duration, compute_work_duration, duration_for_raw_minutes};
