//! Core data models for the Shift Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod preset;
mod shift;
mod time_of_day;
mod wage;
mod work_duration;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, MonthlyTotals, ShiftPayLine,
};
pub use preset::Preset;
pub use shift::{ShiftInterval, ShiftRecord};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
pub use wage::{HourlyWage, SalaryAmount};
pub use work_duration::WorkDuration;
