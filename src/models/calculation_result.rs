//! Calculation result models for the Shift Payroll Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: per-day pay lines, monthly totals, and audit traces.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HourlyWage, SalaryAmount, WorkDuration};

/// The computed pay for a single schedule day.
///
/// Carries the structured [`WorkDuration`] for aggregation alongside its
/// formatted `HH:mm (+Nm)` form for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftPayLine {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Clock-in time as supplied.
    pub start_time: Option<String>,
    /// Clock-out time as supplied.
    pub end_time: Option<String>,
    /// The record's work category.
    pub work_type: String,
    /// Whether the date is a holiday.
    pub is_holiday: bool,
    /// Break-adjusted paid time and break time.
    pub work_duration: WorkDuration,
    /// `work_duration` formatted as `HH:mm (+Nm)`.
    pub display: String,
    /// Rounded salary for the day.
    pub salary: SalaryAmount,
}

/// Aggregated totals over a month of pay lines.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{MonthlyTotals, SalaryAmount};
///
/// let totals = MonthlyTotals {
///     work_days: 2,
///     paid_minutes: 900,
///     paid_hours: 15,
///     paid_remainder_minutes: 0,
///     break_minutes: 120,
///     salary: SalaryAmount(15000),
/// };
/// assert_eq!(totals.paid_hours * 60 + totals.paid_remainder_minutes, totals.paid_minutes);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Number of days with paid time.
    pub work_days: u32,
    /// Total paid minutes.
    pub paid_minutes: u64,
    /// Whole hours of `paid_minutes`.
    pub paid_hours: u64,
    /// Minutes left over after `paid_hours`.
    pub paid_remainder_minutes: u64,
    /// Total break minutes.
    pub break_minutes: u64,
    /// Sum of the per-day rounded salaries.
    pub salary: SalaryAmount,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate input problems that were recovered from, such as a
/// malformed clock time that was treated as a rest day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a schedule pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The hourly wage applied to every line.
    pub hourly_wage: HourlyWage,
    /// One pay line per schedule record, in input order.
    pub lines: Vec<ShiftPayLine>,
    /// Aggregated totals.
    pub totals: MonthlyTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "break_bracket_lookup".to_string(),
            rule_name: "Break Bracket Lookup".to_string(),
            input: serde_json::json!({"raw_minutes": 540}),
            output: serde_json::json!({"paid_minutes": 480, "break_minutes": 60}),
            reasoning: "540 raw minutes falls in the <= 540 bracket".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        let deserialized: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }

    #[test]
    fn test_audit_trace_default_is_empty() {
        let trace = AuditTrace::default();
        assert!(trace.steps.is_empty());
        assert!(trace.warnings.is_empty());
        assert_eq!(trace.duration_us, 0);
    }

    #[test]
    fn test_pay_line_serializes_structured_duration_and_display() {
        let line = ShiftPayLine {
            date: NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            start_time: Some("09:00".to_string()),
            end_time: Some("18:00".to_string()),
            work_type: "勤務".to_string(),
            is_holiday: false,
            work_duration: WorkDuration::from_parts(480, 60),
            display: "08:00 (+60m)".to_string(),
            salary: SalaryAmount(9600),
        };

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["date"], "2026-10-05");
        assert_eq!(json["work_duration"]["paid_minutes"], 480);
        assert_eq!(json["display"], "08:00 (+60m)");
        assert_eq!(json["salary"], 9600);
    }

    #[test]
    fn test_monthly_totals_round_trip() {
        let totals = MonthlyTotals {
            work_days: 20,
            paid_minutes: 9600,
            paid_hours: 160,
            paid_remainder_minutes: 0,
            break_minutes: 1200,
            salary: SalaryAmount(192000),
        };
        let json = serde_json::to_string(&totals).unwrap();
        let deserialized: MonthlyTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, deserialized);
    }
}
