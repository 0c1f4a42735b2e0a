//! Overtime pay calculation.
//!
//! Overtime hours are a monthly figure. They are priced at the staff
//! member's overtime rate, or at time-and-a-half of `rate` when no overtime
//! rate is set.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPeriod, StaffPayroll};

use super::period_scale::{monthly_divisor, prorate_monthly};

/// Returns the default overtime multiplier applied to `rate` (1.5).
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// Returns the hourly rate overtime is paid at.
///
/// An unset or zero `overtime_rate` falls back to `rate * 1.5`.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::effective_overtime_rate;
/// use staffing_engine::models::StaffPayroll;
/// use rust_decimal::Decimal;
///
/// let staff: StaffPayroll = serde_json::from_str(r#"{
///     "id": "1", "name": "John Smith", "pay_type": "hourly", "rate": "16"
/// }"#).unwrap();
/// assert_eq!(effective_overtime_rate(&staff), Decimal::from(24));
/// ```
pub fn effective_overtime_rate(staff: &StaffPayroll) -> Decimal {
    staff
        .overtime_rate
        .filter(|rate| !rate.is_zero())
        .unwrap_or_else(|| staff.rate.saturating_mul(overtime_multiplier()))
}

/// The result of calculating overtime pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct OvertimePayResult {
    /// Overtime pay for the period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime pay for `period`.
///
/// Only applies when `overtime_hours > 0`. Daily pay is
/// `overtime_hours / 22 * effective_rate`, weekly is
/// `overtime_hours / 4 * effective_rate`, and monthly is
/// `overtime_hours * effective_rate`.
pub fn calculate_overtime_pay(
    staff: &StaffPayroll,
    period: PayPeriod,
    step_number: u32,
) -> OvertimePayResult {
    let hours = staff.overtime_hours;

    if hours <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "overtime_pay".to_string(),
            rule_name: "Overtime Pay".to_string(),
            formula: "0".to_string(),
            input: serde_json::json!({
                "overtime_hours": hours.normalize().to_string(),
                "period": period
            }),
            output: serde_json::json!({
                "applies": false,
                "amount": "0"
            }),
            reasoning: "No overtime hours recorded - no overtime pay".to_string(),
        };
        return OvertimePayResult {
            amount: Decimal::ZERO,
            audit_step,
        };
    }

    let effective_rate = effective_overtime_rate(staff);
    let rate_defaulted = staff.overtime_rate.is_none_or(|rate| rate.is_zero());
    let period_hours = prorate_monthly(hours, period);
    let amount = period_hours.saturating_mul(effective_rate);

    let formula = match period {
        PayPeriod::Daily => "overtime_hours / 22 * overtime_rate",
        PayPeriod::Weekly => "overtime_hours / 4 * overtime_rate",
        PayPeriod::Monthly => "overtime_hours * overtime_rate",
    };

    let reasoning = if period == PayPeriod::Monthly {
        format!(
            "{}h x ${} = ${}",
            hours.normalize(),
            effective_rate.normalize(),
            amount.round_dp(2)
        )
    } else {
        format!(
            "{}h / {} x ${} = ${}",
            hours.normalize(),
            monthly_divisor(period),
            effective_rate.normalize(),
            amount.round_dp(2)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        formula: formula.to_string(),
        input: serde_json::json!({
            "overtime_hours": hours.normalize().to_string(),
            "overtime_rate": staff.overtime_rate.map(|r| r.normalize().to_string()),
            "rate": staff.rate.normalize().to_string(),
            "period": period
        }),
        output: serde_json::json!({
            "applies": true,
            "effective_rate": effective_rate.normalize().to_string(),
            "rate_defaulted": rate_defaulted,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    OvertimePayResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceCounts, PayType, PayrollStatus};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_staff(rate: &str, overtime_hours: &str, overtime_rate: Option<&str>) -> StaffPayroll {
        StaffPayroll {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            role: "Waiter".to_string(),
            pay_type: PayType::Hourly,
            rate: dec(rate),
            hours_worked: Some(dec("160")),
            days_worked: Some(22),
            start_date: None,
            status: PayrollStatus::Active,
            attendance_data: AttendanceCounts::default(),
            late_penalty: Decimal::ZERO,
            overtime_hours: dec(overtime_hours),
            overtime_rate: overtime_rate.map(dec),
            night_shifts: 0,
            night_shift_allowance: None,
            calculated_pay: None,
        }
    }

    #[test]
    fn test_overtime_multiplier_is_exactly_1_5() {
        assert_eq!(overtime_multiplier(), dec("1.5"));
    }

    #[test]
    fn test_monthly_overtime_uses_overtime_rate() {
        let staff = create_staff("15", "10", Some("22.5"));
        let result = calculate_overtime_pay(&staff, PayPeriod::Monthly, 2);
        assert_eq!(result.amount, dec("225"));
        assert_eq!(result.audit_step.output["rate_defaulted"], false);
    }

    #[test]
    fn test_weekly_overtime_is_quarter_of_month() {
        let staff = create_staff("15", "10", Some("22.5"));
        let result = calculate_overtime_pay(&staff, PayPeriod::Weekly, 2);
        assert_eq!(result.amount, dec("56.25"));
    }

    #[test]
    fn test_daily_overtime_divides_hours_by_22() {
        let staff = create_staff("15", "22", Some("20"));
        let result = calculate_overtime_pay(&staff, PayPeriod::Daily, 2);
        assert_eq!(result.amount, dec("20"));
    }

    #[test]
    fn test_missing_overtime_rate_defaults_to_time_and_a_half() {
        let staff = create_staff("16", "10", None);
        let result = calculate_overtime_pay(&staff, PayPeriod::Monthly, 2);
        assert_eq!(result.amount, dec("240"));
        assert_eq!(result.audit_step.output["effective_rate"], "24");
        assert_eq!(result.audit_step.output["rate_defaulted"], true);
    }

    #[test]
    fn test_zero_overtime_rate_defaults_to_time_and_a_half() {
        let staff = create_staff("16", "10", Some("0"));
        assert_eq!(effective_overtime_rate(&staff), dec("24"));
    }

    #[test]
    fn test_no_overtime_hours_is_zero() {
        let staff = create_staff("15", "0", Some("22.5"));
        let result = calculate_overtime_pay(&staff, PayPeriod::Monthly, 2);
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.audit_step.output["applies"], false);
    }

    #[test]
    fn test_negative_overtime_hours_is_zero() {
        let staff = create_staff("15", "-5", Some("22.5"));
        assert_eq!(
            calculate_overtime_pay(&staff, PayPeriod::Weekly, 2).amount,
            Decimal::ZERO
        );
    }
}
