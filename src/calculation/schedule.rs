//! Schedule-wide pay calculation.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{AuditTrace, CalculationResult, HourlyWage, ShiftRecord};

use super::monthly_summary::summarize_month;
use super::shift_pay::calculate_shift_pay;

/// Calculates pay lines, totals, and the audit trace for a schedule.
///
/// Lines are returned in input order. Each record is independent, so the
/// calculation is a single pass with no shared state.
pub fn calculate_schedule(
    records: &[ShiftRecord],
    hourly_wage: HourlyWage,
    config: &PayrollConfig,
) -> CalculationResult {
    let start_time = Instant::now();
    let mut lines = Vec::with_capacity(records.len());
    let mut audit_trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    for record in records {
        let result = calculate_shift_pay(record, hourly_wage, config, step_number);
        step_number += result.audit_steps.len() as u32;
        audit_trace.steps.extend(result.audit_steps);
        audit_trace.warnings.extend(result.warnings);
        lines.push(result.line);
    }

    let totals = summarize_month(&lines);
    audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        hourly_wage,
        lines,
        totals,
        audit_trace,
    }
}
