//! Pay assembly.
//!
//! Runs each pay component in order, then takes the late penalty off the
//! sum and clamps the result at zero. Every other pay figure in the crate
//! (cached `calculated_pay`, reports, summaries) comes from here.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CalculatedPay, PayBreakdown, PayPeriod, StaffPayroll};

use super::base_pay::calculate_base_pay;
use super::late_penalty::calculate_late_penalty;
use super::night_shift::calculate_night_shift_pay;
use super::overtime_pay::calculate_overtime_pay;

/// Calculates the full pay breakdown for one staff member and period.
///
/// The audit trail carries one step per component followed by a final
/// `net_pay` step.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_pay_breakdown;
/// use staffing_engine::models::{PayPeriod, StaffPayroll};
/// use rust_decimal::Decimal;
///
/// let staff: StaffPayroll = serde_json::from_str(r#"{
///     "id": "1", "name": "John Smith", "pay_type": "hourly", "rate": "15",
///     "hours_worked": "160", "overtime_hours": "10", "overtime_rate": "22.5",
///     "attendance_data": { "present": 20, "late": 2, "absent": 0, "on_leave": 0 }
/// }"#).unwrap();
///
/// let breakdown = calculate_pay_breakdown(&staff, PayPeriod::Monthly);
/// assert_eq!(breakdown.base_pay, Decimal::from(2400));
/// assert_eq!(breakdown.overtime_pay, Decimal::from(225));
/// assert_eq!(breakdown.late_penalty, Decimal::from(50));
/// assert_eq!(breakdown.total, Decimal::from(2575));
/// assert_eq!(breakdown.audit_steps.len(), 5);
/// ```
pub fn calculate_pay_breakdown(staff: &StaffPayroll, period: PayPeriod) -> PayBreakdown {
    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(5);
    let mut step_number: u32 = 1;

    let base = calculate_base_pay(staff, period, step_number);
    audit_steps.push(base.audit_step);
    step_number += 1;

    let overtime = calculate_overtime_pay(staff, period, step_number);
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    let night_shift = calculate_night_shift_pay(staff, period, step_number);
    audit_steps.push(night_shift.audit_step);
    step_number += 1;

    let penalty = calculate_late_penalty(staff, period, step_number);
    audit_steps.push(penalty.audit_step);
    step_number += 1;

    let gross = base
        .amount
        .saturating_add(overtime.amount)
        .saturating_add(night_shift.amount);
    let net = gross.saturating_sub(penalty.amount);
    let total = net.max(Decimal::ZERO);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        formula: "max(0, base_pay + overtime_pay + night_shift_pay - late_penalty)".to_string(),
        input: serde_json::json!({
            "base_pay": base.amount.normalize().to_string(),
            "overtime_pay": overtime.amount.normalize().to_string(),
            "night_shift_pay": night_shift.amount.normalize().to_string(),
            "late_penalty": penalty.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "clamped": net < Decimal::ZERO,
            "total": total.normalize().to_string()
        }),
        reasoning: if net < Decimal::ZERO {
            format!(
                "Penalty ${} exceeds gross ${} - pay clamped to $0",
                penalty.amount.round_dp(2),
                gross.round_dp(2)
            )
        } else {
            format!(
                "${} - ${} = ${}",
                gross.round_dp(2),
                penalty.amount.round_dp(2),
                total.round_dp(2)
            )
        },
    });

    PayBreakdown {
        staff_id: staff.id.clone(),
        period,
        base_pay: base.amount,
        overtime_pay: overtime.amount,
        night_shift_pay: night_shift.amount,
        late_penalty: penalty.amount,
        total,
        audit_steps,
    }
}

/// Calculates net pay for one staff member and period. Never negative.
pub fn calculate_pay(staff: &StaffPayroll, period: PayPeriod) -> Decimal {
    calculate_pay_breakdown(staff, period).total
}

/// Calculates pay at all three period scales.
pub fn calculate_all_periods(staff: &StaffPayroll) -> CalculatedPay {
    CalculatedPay {
        daily: calculate_pay(staff, PayPeriod::Daily),
        weekly: calculate_pay(staff, PayPeriod::Weekly),
        monthly: calculate_pay(staff, PayPeriod::Monthly),
    }
}
