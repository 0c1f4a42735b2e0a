//! Late penalty calculation.
//!
//! Each late arrival in the month costs a fixed amount. The monthly total
//! is pro-rated to the daily and weekly scales.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPeriod, StaffPayroll};

use super::period_scale::prorate_monthly;

/// Returns the deduction per late arrival (25).
pub fn late_penalty_per_instance() -> Decimal {
    Decimal::from(25)
}

/// Returns the monthly penalty for `late_count` late arrivals.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::monthly_late_penalty;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_late_penalty(2), Decimal::from(50));
/// assert_eq!(monthly_late_penalty(0), Decimal::ZERO);
/// ```
pub fn monthly_late_penalty(late_count: u32) -> Decimal {
    Decimal::from(late_count) * late_penalty_per_instance()
}

/// The result of calculating the late penalty, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct LatePenaltyResult {
    /// Penalty for the period, as a positive amount to deduct.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the late penalty to deduct for `period`.
///
/// The penalty is derived from `attendance_data.late`, not from the stored
/// `late_penalty` field.
pub fn calculate_late_penalty(
    staff: &StaffPayroll,
    period: PayPeriod,
    step_number: u32,
) -> LatePenaltyResult {
    let late_count = staff.attendance_data.late;
    let monthly = monthly_late_penalty(late_count);
    let amount = prorate_monthly(monthly, period);

    let formula = match period {
        PayPeriod::Daily => "late_count * 25 / 22",
        PayPeriod::Weekly => "late_count * 25 / 4",
        PayPeriod::Monthly => "late_count * 25",
    };

    let reasoning = if late_count == 0 {
        "No late arrivals - no penalty".to_string()
    } else {
        format!(
            "{} late x ${} = ${} monthly -> ${} {}",
            late_count,
            late_penalty_per_instance(),
            monthly,
            amount.round_dp(2),
            period
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_penalty".to_string(),
        rule_name: "Late Penalty".to_string(),
        formula: formula.to_string(),
        input: serde_json::json!({
            "late_count": late_count,
            "period": period
        }),
        output: serde_json::json!({
            "monthly_penalty": monthly.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    LatePenaltyResult { amount, audit_step }
}
