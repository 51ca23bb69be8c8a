//! Monthly totals.
//!
//! Totals are summed over the structured [`WorkDuration`](crate::models::WorkDuration)
//! of each line, never over the formatted display strings.

use crate::models::{MonthlyTotals, ShiftPayLine};

/// Aggregates pay lines into monthly totals.
///
/// A work day is any line with paid time. The total salary is the sum of the
/// per-line rounded salaries, so it always matches the figures shown per day.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::summarize_month;
///
/// let totals = summarize_month(&[]);
/// assert_eq!(totals.work_days, 0);
/// assert_eq!(totals.salary.value(), 0);
/// ```
pub fn summarize_month(lines: &[ShiftPayLine]) -> MonthlyTotals {
    let work_days = lines
        .iter()
        .filter(|line| line.work_duration.paid_minutes() > 0)
        .count() as u32;

    let paid_minutes: u64 = lines
        .iter()
        .map(|line| u64::from(line.work_duration.paid_minutes()))
        .sum();

    let break_minutes: u64 = lines
        .iter()
        .map(|line| u64::from(line.work_duration.break_minutes()))
        .sum();

    MonthlyTotals {
        work_days,
        paid_minutes,
        paid_hours: paid_minutes / 60,
        paid_remainder_minutes: paid_minutes % 60,
        break_minutes,
        salary: lines.iter().map(|line| line.salary).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_shift_pay;
    use crate::config::PayrollConfig;
    use crate::models::{HourlyWage, SalaryAmount, ShiftRecord};
    use chrono::NaiveDate;

    fn make_line(day: u32, start: Option<&str>, end: Option<&str>, work_type: &str) -> ShiftPayLine {
        let record = ShiftRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            work_type: work_type.to_string(),
            is_holiday: false,
        };
        calculate_shift_pay(&record, HourlyWage::from(1000), &PayrollConfig::default(), 1).line
    }

    /// MS-001: mixed month
    #[test]
    fn test_ms_001_mixed_month() {
        let lines = vec![
            make_line(1, Some("09:00"), Some("18:00"), "勤務"), // 480 / 60
            make_line(2, None, None, "休み"),
            make_line(3, Some("22:00"), Some("06:00"), "勤務"), // 420 / 60
            make_line(4, Some("10:00"), Some("14:20"), "勤務"), // 260 raw -> 270 / 30
        ];

        let totals = summarize_month(&lines);

        assert_eq!(totals.work_days, 3);
        assert_eq!(totals.paid_minutes, 480 + 420 + 270);
        assert_eq!(totals.paid_hours, 19);
        assert_eq!(totals.paid_remainder_minutes, 30);
        assert_eq!(totals.break_minutes, 60 + 60 + 30);
        // 8000 + 7000 + 4500
        assert_eq!(totals.salary, SalaryAmount(19500));
    }

    /// MS-002: salary total is the sum of rounded per-day salaries
    #[test]
    fn test_ms_002_salary_sums_rounded_lines() {
        // 375 paid minutes at 1000/h = 6250 exactly; use 1001/h to force rounding
        let record = ShiftRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            start_time: Some("09:00".to_string()),
            end_time: Some("16:00".to_string()),
            work_type: "勤務".to_string(),
            is_holiday: false,
        };
        let config = PayrollConfig::default();
        let line = calculate_shift_pay(&record, HourlyWage::from(1001), &config, 1).line;
        // 375 * 1001 / 60 = 6256.25 -> 6256
        assert_eq!(line.salary, SalaryAmount(6256));

        let totals = summarize_month(&[line.clone(), line]);
        assert_eq!(totals.salary, SalaryAmount(12512));
    }

    #[test]
    fn test_malformed_day_is_not_a_work_day() {
        let lines = vec![
            make_line(1, Some("09:00"), Some("18:00"), "勤務"),
            make_line(2, Some("bad"), Some("18:00"), "勤務"),
        ];

        let totals = summarize_month(&lines);
        assert_eq!(totals.work_days, 1);
        assert_eq!(totals.paid_minutes, 480);
    }
}
