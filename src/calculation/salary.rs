//! Salary calculation.
//!
//! Converts break-adjusted paid minutes and an hourly wage into a whole
//! currency amount.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{HourlyWage, SalaryAmount};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Computes `round(paid_minutes / 60 * hourly_wage)`.
///
/// The product is taken before dividing by 60 so exact half amounts stay
/// exact, then rounded half away from zero. A product that does not fit in
/// a `Decimal` or a `u64` saturates to `u64::MAX`.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_salary;
/// use shift_payroll::models::{HourlyWage, SalaryAmount};
///
/// assert_eq!(compute_salary(480, HourlyWage::from(1000)), SalaryAmount(8000));
/// // 7.8333... hours
/// assert_eq!(compute_salary(470, HourlyWage::from(1000)), SalaryAmount(7833));
/// // 7.5 exactly: halves round away from zero
/// assert_eq!(compute_salary(45, HourlyWage::from(10)), SalaryAmount(8));
/// ```
pub fn compute_salary(paid_minutes: u32, hourly_wage: HourlyWage) -> SalaryAmount {
    let Some(product) = Decimal::from(paid_minutes).checked_mul(hourly_wage.rate()) else {
        warn!(
            paid_minutes,
            hourly_wage = %hourly_wage,
            "Salary product overflowed, saturating"
        );
        return SalaryAmount(u64::MAX);
    };

    let amount = (product / MINUTES_PER_HOUR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    SalaryAmount(amount.to_u64().unwrap_or(u64::MAX))
}
