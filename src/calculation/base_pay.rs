//! Base pay calculation.
//!
//! Hourly staff are paid for the hours they worked; monthly staff are paid
//! their salary pro-rated over 22 working days.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPeriod, PayType, StaffPayroll};

use super::period_scale::{WORKING_DAYS_PER_MONTH, WORKING_DAYS_PER_WEEK};

/// Weeks that an hourly worker's `hours_worked` is normalized over for weekly pay.
pub const HOURLY_WEEKLY_DIVISOR: u32 = 2;

/// Hours assumed for an hourly worker's month when none are recorded.
pub const STANDARD_MONTHLY_HOURS: u32 = 160;

/// The result of calculating base pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BasePayResult {
    /// Base pay for the period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates base pay for `period`.
///
/// | pay type | daily                          | weekly               | monthly              |
/// |----------|--------------------------------|----------------------|----------------------|
/// | hourly   | `hours / days_worked * rate`   | `hours / 2 * rate`   | `hours * rate`       |
/// | monthly  | `rate / 22`                    | `rate / 22 * 5`      | `rate`               |
///
/// Missing or zero `hours_worked` contributes nothing for hourly staff, as
/// does a missing or zero `days_worked` for hourly daily pay.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_base_pay;
/// use staffing_engine::models::{PayPeriod, PayType, StaffPayroll};
/// use rust_decimal::Decimal;
///
/// let staff: StaffPayroll = serde_json::from_str(r#"{
///     "id": "1", "name": "John Smith", "pay_type": "hourly",
///     "rate": "15", "hours_worked": "160"
/// }"#).unwrap();
///
/// let result = calculate_base_pay(&staff, PayPeriod::Monthly, 1);
/// assert_eq!(result.amount, Decimal::from(2400));
/// assert_eq!(result.audit_step.rule_id, "base_pay");
/// ```
pub fn calculate_base_pay(staff: &StaffPayroll, period: PayPeriod, step_number: u32) -> BasePayResult {
    let (amount, formula, reasoning) = match staff.pay_type {
        PayType::Hourly => hourly_base_pay(staff, period),
        PayType::Monthly => monthly_base_pay(staff.rate, period),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        formula: formula.to_string(),
        input: serde_json::json!({
            "pay_type": staff.pay_type,
            "period": period,
            "rate": staff.rate.normalize().to_string(),
            "hours_worked": staff.hours_worked.map(|h| h.normalize().to_string()),
            "days_worked": staff.days_worked
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    BasePayResult { amount, audit_step }
}

fn hourly_base_pay(staff: &StaffPayroll, period: PayPeriod) -> (Decimal, &'static str, String) {
    let Some(hours) = staff.hours_worked.filter(|h| !h.is_zero()) else {
        return (
            Decimal::ZERO,
            "0",
            "No hours recorded - no base pay".to_string(),
        );
    };
    let rate = staff.rate;

    match period {
        PayPeriod::Daily => match staff.days_worked.filter(|d| *d > 0) {
            Some(days) => {
                let amount = (hours / Decimal::from(days)).saturating_mul(rate);
                (
                    amount,
                    "hours_worked / days_worked * rate",
                    format!(
                        "{}h / {} days x ${} = ${}",
                        hours.normalize(),
                        days,
                        rate.normalize(),
                        amount.round_dp(2)
                    ),
                )
            }
            None => (
                Decimal::ZERO,
                "0",
                "No days worked recorded - no daily base pay".to_string(),
            ),
        },
        PayPeriod::Weekly => {
            let amount = (hours / Decimal::from(HOURLY_WEEKLY_DIVISOR)).saturating_mul(rate);
            (
                amount,
                "hours_worked / 2 * rate",
                format!(
                    "{}h / {} weeks x ${} = ${}",
                    hours.normalize(),
                    HOURLY_WEEKLY_DIVISOR,
                    rate.normalize(),
                    amount.round_dp(2)
                ),
            )
        }
        PayPeriod::Monthly => {
            let amount = hours.saturating_mul(rate);
            (
                amount,
                "hours_worked * rate",
                format!(
                    "{}h x ${} = ${}",
                    hours.normalize(),
                    rate.normalize(),
                    amount.round_dp(2)
                ),
            )
        }
    }
}

fn monthly_base_pay(rate: Decimal, period: PayPeriod) -> (Decimal, &'static str, String) {
    let days_per_month = Decimal::from(WORKING_DAYS_PER_MONTH);
    match period {
        PayPeriod::Daily => {
            let amount = rate / days_per_month;
            (
                amount,
                "rate / 22",
                format!("${} / {} days = ${}", rate.normalize(), WORKING_DAYS_PER_MONTH, amount.round_dp(2)),
            )
        }
        PayPeriod::Weekly => {
            let amount = rate / days_per_month * Decimal::from(WORKING_DAYS_PER_WEEK);
            (
                amount,
                "rate / 22 * 5",
                format!(
                    "${} / {} days x {} days = ${}",
                    rate.normalize(),
                    WORKING_DAYS_PER_MONTH,
                    WORKING_DAYS_PER_WEEK,
                    amount.round_dp(2)
                ),
            )
        }
        PayPeriod::Monthly => (rate, "rate", format!("Monthly salary ${}", rate.normalize())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceCounts, PayrollStatus};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_staff(pay_type: PayType, rate: &str, hours: Option<&str>, days: Option<u32>) -> StaffPayroll {
        StaffPayroll {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            role: "Waiter".to_string(),
            pay_type,
            rate: dec(rate),
            hours_worked: hours.map(dec),
            days_worked: days,
            start_date: None,
            status: PayrollStatus::Active,
            attendance_data: AttendanceCounts::default(),
            late_penalty: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            overtime_rate: None,
            night_shifts: 0,
            night_shift_allowance: None,
            calculated_pay: None,
        }
    }

    #[test]
    fn test_hourly_daily_uses_hours_per_day_worked() {
        let staff = create_staff(PayType::Hourly, "15", Some("78"), Some(10));
        let result = calculate_base_pay(&staff, PayPeriod::Daily, 1);
        assert_eq!(result.amount, dec("117"));
        assert_eq!(result.audit_step.formula, "hours_worked / days_worked * rate");
    }

    #[test]
    fn test_hourly_weekly_normalizes_over_two_weeks() {
        let staff = create_staff(PayType::Hourly, "15", Some("78"), Some(10));
        let result = calculate_base_pay(&staff, PayPeriod::Weekly, 1);
        assert_eq!(result.amount, dec("585"));
    }

    #[test]
    fn test_hourly_monthly_is_hours_times_rate() {
        let staff = create_staff(PayType::Hourly, "15", Some("160"), None);
        let result = calculate_base_pay(&staff, PayPeriod::Monthly, 1);
        assert_eq!(result.amount, dec("2400"));
        assert!(result.audit_step.reasoning.contains("160h x $15"));
    }

    #[test]
    fn test_hourly_without_hours_is_zero() {
        let staff = create_staff(PayType::Hourly, "15", None, Some(10));
        for period in PayPeriod::ALL {
            assert_eq!(calculate_base_pay(&staff, period, 1).amount, Decimal::ZERO);
        }
    }

    #[test]
    fn test_hourly_with_zero_hours_is_zero() {
        let staff = create_staff(PayType::Hourly, "15", Some("0"), Some(10));
        assert_eq!(calculate_base_pay(&staff, PayPeriod::Monthly, 1).amount, Decimal::ZERO);
    }

    #[test]
    fn test_hourly_daily_without_days_worked_is_zero() {
        let staff = create_staff(PayType::Hourly, "15", Some("78"), None);
        assert_eq!(calculate_base_pay(&staff, PayPeriod::Daily, 1).amount, Decimal::ZERO);

        let staff = create_staff(PayType::Hourly, "15", Some("78"), Some(0));
        assert_eq!(calculate_base_pay(&staff, PayPeriod::Daily, 1).amount, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_daily_is_rate_over_22() {
        let staff = create_staff(PayType::Monthly, "4500", None, None);
        let result = calculate_base_pay(&staff, PayPeriod::Daily, 1);
        assert_eq!(result.amount.round_dp(3), dec("204.545"));
    }

    #[test]
    fn test_monthly_weekly_is_five_working_days() {
        let staff = create_staff(PayType::Monthly, "4500", None, None);
        let result = calculate_base_pay(&staff, PayPeriod::Weekly, 1);
        assert_eq!(result.amount.round_dp(3), dec("1022.727"));
    }

    #[test]
    fn test_monthly_monthly_is_rate() {
        let staff = create_staff(PayType::Monthly, "4500", None, None);
        let result = calculate_base_pay(&staff, PayPeriod::Monthly, 1);
        assert_eq!(result.amount, dec("4500"));
        assert_eq!(result.audit_step.formula, "rate");
    }

    #[test]
    fn test_monthly_ignores_hours_worked() {
        let staff = create_staff(PayType::Monthly, "4500", Some("10"), Some(1));
        assert_eq!(calculate_base_pay(&staff, PayPeriod::Monthly, 1).amount, dec("4500"));
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let staff = create_staff(PayType::Hourly, "15.50", Some("160"), Some(22));
        let result = calculate_base_pay(&staff, PayPeriod::Weekly, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.input["pay_type"], "hourly");
        assert_eq!(result.audit_step.input["period"], "weekly");
        assert_eq!(result.audit_step.input["rate"], "15.5");
        assert_eq!(result.audit_step.input["hours_worked"], "160");
        assert_eq!(result.audit_step.input["days_worked"], 22);
        assert_eq!(result.audit_step.output["amount"], "1240");
    }
}
