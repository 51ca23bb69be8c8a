//! Request types for the Shift Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{HourlyWage, ShiftRecord};

/// Request body for the `/calculate` endpoint.
///
/// Contains an employee's hourly wage and the schedule days to price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's hourly wage; the configured default applies if absent.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// The schedule days, typically one month.
    pub shifts: Vec<ShiftRequest>,
}

impl CalculationRequest {
    /// Validates and returns the requested wage.
    ///
    /// A negative wage is rejected here rather than clamped.
    pub fn hourly_wage(&self) -> EngineResult<Option<HourlyWage>> {
        self.hourly_wage.map(HourlyWage::try_new).transpose()
    }
}

/// One schedule day in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The calendar date.
    pub date: NaiveDate,
    /// Clock-in time as `HH:mm`, or null.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time as `HH:mm`, or null.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The work category.
    pub work_type: String,
    /// Whether the date is a holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

impl From<ShiftRequest> for ShiftRecord {
    fn from(req: ShiftRequest) -> Self {
        ShiftRecord {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            work_type: req.work_type,
            is_holiday: req.is_holiday,
        }
    }
}
