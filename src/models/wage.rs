//! Wage and salary models.
//!
//! This module defines [`HourlyWage`] and [`SalaryAmount`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// A non-negative hourly rate in currency units.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::HourlyWage;
/// use rust_decimal::Decimal;
///
/// let wage = HourlyWage::new(Decimal::from(1200));
/// assert_eq!(wage.rate(), Decimal::from(1200));
///
/// // Negative rates are clamped rather than propagated.
/// assert_eq!(HourlyWage::new(Decimal::from(-5)).rate(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct HourlyWage(Decimal);

impl HourlyWage {
    /// A zero rate.
    pub const ZERO: HourlyWage = HourlyWage(Decimal::ZERO);

    /// Creates a wage, clamping negative rates to zero with a warning.
    pub fn new(rate: Decimal) -> Self {
        if rate.is_sign_negative() && !rate.is_zero() {
            warn!(rate = %rate, "Negative hourly wage clamped to zero");
            return Self::ZERO;
        }
        Self(rate)
    }

    /// Creates a wage, rejecting negative rates.
    pub fn try_new(rate: Decimal) -> EngineResult<Self> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(EngineError::InvalidWage {
                value: rate.to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(Self(rate))
    }

    /// The rate per hour.
    pub fn rate(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for HourlyWage {
    type Error = EngineError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(rate)
    }
}

impl From<HourlyWage> for Decimal {
    fn from(wage: HourlyWage) -> Self {
        wage.0
    }
}

impl From<u32> for HourlyWage {
    fn from(rate: u32) -> Self {
        Self(Decimal::from(rate))
    }
}

impl fmt::Display for HourlyWage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A rounded, non-negative salary in whole currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SalaryAmount(pub u64);

impl SalaryAmount {
    /// A zero salary.
    pub const ZERO: SalaryAmount = SalaryAmount(0);

    /// The amount in whole currency units.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::iter::Sum for SalaryAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        SalaryAmount(iter.fold(0u64, |acc, s| acc.saturating_add(s.0)))
    }
}

impl fmt::Display for SalaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
