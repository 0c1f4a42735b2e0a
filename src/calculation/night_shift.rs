//! Night-shift allowance calculation.
//!
//! The allowance is always a monthly figure and is pro-rated to the daily
//! and weekly scales.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPeriod, StaffPayroll};

use super::period_scale::prorate_monthly;

/// The result of calculating night-shift pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct NightShiftPayResult {
    /// Night-shift pay for the period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the night-shift allowance for `period`.
///
/// Applies only when the staff member worked at least one night shift and
/// has a non-zero allowance. Daily is `allowance / 22`, weekly is
/// `allowance / 4`, monthly is the allowance itself.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_night_shift_pay;
/// use staffing_engine::models::{PayPeriod, StaffPayroll};
/// use rust_decimal::Decimal;
///
/// let staff: StaffPayroll = serde_json::from_str(r#"{
///     "id": "1", "name": "John Smith", "pay_type": "hourly", "rate": "15",
///     "night_shifts": 4, "night_shift_allowance": "80"
/// }"#).unwrap();
///
/// let result = calculate_night_shift_pay(&staff, PayPeriod::Weekly, 3);
/// assert_eq!(result.amount, Decimal::from(20));
/// ```
pub fn calculate_night_shift_pay(
    staff: &StaffPayroll,
    period: PayPeriod,
    step_number: u32,
) -> NightShiftPayResult {
    let allowance = staff
        .night_shift_allowance
        .filter(|a| !a.is_zero() && staff.night_shifts > 0);

    let input = serde_json::json!({
        "night_shifts": staff.night_shifts,
        "night_shift_allowance": staff.night_shift_allowance.map(|a| a.normalize().to_string()),
        "period": period
    });

    let Some(allowance) = allowance else {
        let reasoning = if staff.night_shifts == 0 {
            "No night shifts worked - no allowance"
        } else {
            "No night-shift allowance set - no allowance"
        };
        let audit_step = AuditStep {
            step_number,
            rule_id: "night_shift_pay".to_string(),
            rule_name: "Night Shift Allowance".to_string(),
            formula: "0".to_string(),
            input,
            output: serde_json::json!({
                "applies": false,
                "amount": "0"
            }),
            reasoning: reasoning.to_string(),
        };
        return NightShiftPayResult {
            amount: Decimal::ZERO,
            audit_step,
        };
    };

    let amount = prorate_monthly(allowance, period);
    let formula = match period {
        PayPeriod::Daily => "night_shift_allowance / 22",
        PayPeriod::Weekly => "night_shift_allowance / 4",
        PayPeriod::Monthly => "night_shift_allowance",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_shift_pay".to_string(),
        rule_name: "Night Shift Allowance".to_string(),
        formula: formula.to_string(),
        input,
        output: serde_json::json!({
            "applies": true,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} night shifts, monthly allowance ${} -> ${} {}",
            staff.night_shifts,
            allowance.normalize(),
            amount.round_dp(2),
            period
        ),
    };

    NightShiftPayResult { amount, audit_step }
}
