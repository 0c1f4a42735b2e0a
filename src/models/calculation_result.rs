//! Calculation result models.
//!
//! This module contains the [`PayBreakdown`] type produced by the pay
//! calculator and the [`AuditStep`] records that explain each component of
//! it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one pay component.
///
/// # Example
///
/// ```
/// use staffing_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "base_pay".to_string(),
///     rule_name: "Base Pay".to_string(),
///     formula: "hours_worked * rate".to_string(),
///     input: serde_json::json!({ "hours_worked": "160", "rate": "15" }),
///     output: serde_json::json!({ "amount": "2400" }),
///     reasoning: "160h x $15 = $2400".to_string(),
/// };
/// assert_eq!(step.rule_id, "base_pay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The formula applied for the requested period.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The components of one staff member's pay for one period.
///
/// `total` is `max(0, base_pay + overtime_pay + night_shift_pay - late_penalty)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The staff member the breakdown is for.
    pub staff_id: String,
    /// The period scale of every amount.
    pub period: PayPeriod,
    /// Base pay.
    pub base_pay: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Night-shift allowance, pro-rated.
    pub night_shift_pay: Decimal,
    /// Late penalty, pro-rated.
    pub late_penalty: Decimal,
    /// Net pay, never negative.
    pub total: Decimal,
    /// One step per component, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

impl PayBreakdown {
    /// Sum of the additive components before the penalty is taken off.
    pub fn gross(&self) -> Decimal {
        self.base_pay
            .saturating_add(self.overtime_pay)
            .saturating_add(self.night_shift_pay)
    }
}
