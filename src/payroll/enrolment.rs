//! Adding a staff member to payroll.

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{
    STANDARD_MONTHLY_HOURS, WORKING_DAYS_PER_MONTH, monthly_late_penalty, overtime_multiplier,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{PayProfile, PayType, PayrollStatus, StaffPayroll};

use super::updates::{ensure_non_negative, recompute};

/// Builds a payroll record from `profile`.
///
/// - `late_penalty` is the late count times the per-instance penalty.
/// - Hourly profiles without an overtime rate get `rate * 1.5`.
/// - Hourly profiles without hours default to 160 hours over 22 days.
/// - A missing night-shift allowance becomes zero.
///
/// The initial `calculated_pay` comes from the same calculation every other
/// operation uses.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayProfile`] when the rate is not positive
/// or any other amount is negative.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{PayProfile, PayType};
/// use staffing_engine::payroll::add_to_payroll;
/// use rust_decimal::Decimal;
///
/// let profile: PayProfile = serde_json::from_str(r#"{
///     "staff_id": "5", "name": "Robert Brown", "pay_type": "hourly", "rate": "16"
/// }"#).unwrap();
///
/// let record = add_to_payroll(profile).unwrap();
/// assert_eq!(record.overtime_rate, Some(Decimal::from(24)));
/// assert_eq!(record.hours_worked, Some(Decimal::from(160)));
/// assert_eq!(record.calculated_pay.unwrap().monthly, Decimal::from(2560));
/// ```
pub fn add_to_payroll(profile: PayProfile) -> EngineResult<StaffPayroll> {
    if profile.rate <= Decimal::ZERO {
        return Err(EngineError::InvalidPayProfile {
            field: "rate".to_string(),
            message: format!("must be greater than zero, got {}", profile.rate),
        });
    }
    if let Some(overtime_rate) = profile.overtime_rate {
        ensure_non_negative("overtime_rate", overtime_rate)?;
    }
    if let Some(allowance) = profile.night_shift_allowance {
        ensure_non_negative("night_shift_allowance", allowance)?;
    }
    if let Some(hours) = profile.hours_worked {
        ensure_non_negative("hours_worked", hours)?;
    }
    ensure_non_negative("overtime_hours", profile.overtime_hours)?;

    let (hours_worked, days_worked, overtime_rate) = match profile.pay_type {
        PayType::Hourly => (
            profile
                .hours_worked
                .or(Some(Decimal::from(STANDARD_MONTHLY_HOURS))),
            profile.days_worked.or(Some(WORKING_DAYS_PER_MONTH)),
            profile
                .overtime_rate
                .or(Some(profile.rate.saturating_mul(overtime_multiplier()))),
        ),
        PayType::Monthly => (profile.hours_worked, profile.days_worked, profile.overtime_rate),
    };

    let mut record = StaffPayroll {
        id: profile.staff_id,
        name: profile.name,
        role: profile.role,
        pay_type: profile.pay_type,
        rate: profile.rate,
        hours_worked,
        days_worked,
        start_date: profile.start_date,
        status: PayrollStatus::Active,
        attendance_data: profile.attendance_data,
        late_penalty: monthly_late_penalty(profile.attendance_data.late),
        overtime_hours: profile.overtime_hours,
        overtime_rate,
        night_shifts: profile.night_shifts,
        night_shift_allowance: Some(profile.night_shift_allowance.unwrap_or(Decimal::ZERO)),
        calculated_pay: None,
    };
    recompute(&mut record);

    info!(
        staff_id = %record.id,
        pay_type = ?record.pay_type,
        rate = %record.rate,
        "Added to payroll"
    );

    Ok(record)
}
