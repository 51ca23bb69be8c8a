//! Per-day shift pay calculation.
//!
//! Applies the work-time and salary calculators to one schedule record and
//! records each decision in the audit trail.

use tracing::{debug, warn};

use crate::config::PayrollConfig;
use crate::models::{
    AuditStep, AuditWarning, HourlyWage, SalaryAmount, ShiftPayLine, ShiftRecord, WorkDuration,
};

use super::break_table::lookup_bracket;
use super::salary::compute_salary;

/// Warning code for a clock time that could not be parsed.
pub const MALFORMED_TIME_WARNING: &str = "MALFORMED_TIME";

/// The result of calculating pay for one schedule record.
#[derive(Debug, Clone)]
pub struct ShiftPayResult {
    /// The pay line for the record.
    pub line: ShiftPayLine,
    /// The audit steps recording this calculation (in order: work duration,
    /// salary).
    pub audit_steps: Vec<AuditStep>,
    /// Recovered input problems.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the paid time and salary for one schedule record.
///
/// Only records whose `work_type` equals the configured working-day label
/// are paid. Missing or malformed times produce a zero-duration line; a
/// malformed time also produces a [`MALFORMED_TIME_WARNING`] warning.
///
/// # Arguments
///
/// * `record` - The schedule record
/// * `hourly_wage` - The employee's hourly wage
/// * `config` - The payroll configuration
/// * `start_step_number` - The starting step number for audit trail sequencing
pub fn calculate_shift_pay(
    record: &ShiftRecord,
    hourly_wage: HourlyWage,
    config: &PayrollConfig,
    start_step_number: u32,
) -> ShiftPayResult {
    let mut warnings = Vec::new();

    // Step 1: Determine the work duration
    let (work_duration, duration_audit) = if !record.is_working_day(&config.working_day_label) {
        let step = AuditStep {
            step_number: start_step_number,
            rule_id: "work_type_check".to_string(),
            rule_name: "Working Day Check".to_string(),
            input: serde_json::json!({
                "date": record.date.to_string(),
                "work_type": record.work_type,
                "working_day_label": config.working_day_label
            }),
            output: serde_json::json!({
                "paid_minutes": 0,
                "break_minutes": 0
            }),
            reasoning: format!("'{}' is not a paid working day", record.work_type),
        };
        (WorkDuration::ZERO, step)
    } else {
        match record.interval() {
            Err(err) => {
                warn!(
                    date = %record.date,
                    error = %err,
                    "Malformed shift time, treating as rest day"
                );
                warnings.push(AuditWarning {
                    code: MALFORMED_TIME_WARNING.to_string(),
                    message: format!("{}: {}", record.date, err),
                    severity: "low".to_string(),
                });
                let step = duration_step(
                    record,
                    start_step_number,
                    None,
                    WorkDuration::ZERO,
                    format!("Could not read shift times ({}), treated as a rest day", err),
                );
                (WorkDuration::ZERO, step)
            }
            Ok(interval) => match interval.raw_minutes() {
                None => {
                    let step = duration_step(
                        record,
                        start_step_number,
                        None,
                        WorkDuration::ZERO,
                        "Clock-in or clock-out missing, treated as a rest day".to_string(),
                    );
                    (WorkDuration::ZERO, step)
                }
                Some(raw_minutes) => {
                    let bracket = lookup_bracket(raw_minutes);
                    let duration = bracket.work_duration();
                    let bracket_desc = match bracket.max_raw_minutes {
                        Some(max) => format!("<= {} bracket", max),
                        None => "open bracket".to_string(),
                    };
                    let reasoning = format!(
                        "{} raw minutes{} falls in the {}: {} paid + {} break",
                        raw_minutes,
                        if interval.crosses_midnight() {
                            " (crossing midnight)"
                        } else {
                            ""
                        },
                        bracket_desc,
                        duration.paid_minutes(),
                        duration.break_minutes()
                    );
                    let step = duration_step(
                        record,
                        start_step_number,
                        Some(raw_minutes),
                        duration,
                        reasoning,
                    );
                    (duration, step)
                }
            },
        }
    };

    // Step 2: Salary
    let salary = if work_duration.is_zero() {
        SalaryAmount::ZERO
    } else {
        compute_salary(work_duration.paid_minutes(), hourly_wage)
    };

    let salary_step = AuditStep {
        step_number: start_step_number + 1,
        rule_id: "salary_calculation".to_string(),
        rule_name: "Salary Calculation".to_string(),
        input: serde_json::json!({
            "paid_minutes": work_duration.paid_minutes(),
            "hourly_wage": hourly_wage.rate().normalize().to_string()
        }),
        output: serde_json::json!({
            "salary": salary.value()
        }),
        reasoning: format!(
            "{} paid minutes x {}/h = {} (rounded half away from zero)",
            work_duration.paid_minutes(),
            hourly_wage,
            salary
        ),
    };

    debug!(
        date = %record.date,
        paid_minutes = work_duration.paid_minutes(),
        break_minutes = work_duration.break_minutes(),
        salary = salary.value(),
        "Shift pay calculated"
    );

    let line = ShiftPayLine {
        date: record.date,
        start_time: record.start_time.clone(),
        end_time: record.end_time.clone(),
        work_type: record.work_type.clone(),
        is_holiday: record.is_holiday,
        work_duration,
        display: work_duration.to_string(),
        salary,
    };

    ShiftPayResult {
        line,
        audit_steps: vec![duration_audit, salary_step],
        warnings,
    }
}

fn duration_step(
    record: &ShiftRecord,
    step_number: u32,
    raw_minutes: Option<u32>,
    duration: WorkDuration,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "break_bracket_lookup".to_string(),
        rule_name: "Break Bracket Lookup".to_string(),
        input: serde_json::json!({
            "date": record.date.to_string(),
            "start_time": record.start_time,
            "end_time": record.end_time,
            "raw_minutes": raw_minutes
        }),
        output: serde_json::json!({
            "paid_minutes": duration.paid_minutes(),
            "break_minutes": duration.break_minutes()
        }),
        reasoning,
    }
}
