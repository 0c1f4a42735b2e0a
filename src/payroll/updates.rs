//! Field updates on payroll records.
//!
//! Every update writes its field and then recomputes `calculated_pay` for
//! all three periods before returning, so a cached value is never stale
//! relative to the write that preceded it. A rejected update leaves the
//! collection untouched.

use rust_decimal::Decimal;
use tracing::info;

use crate::attendance::AttendanceSummary;
use crate::calculation::{calculate_all_periods, monthly_late_penalty};
use crate::error::{EngineError, EngineResult};
use crate::models::StaffPayroll;

pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidPayProfile {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

fn find_record<'a>(
    collection: &'a mut [StaffPayroll],
    staff_id: &str,
) -> EngineResult<&'a mut StaffPayroll> {
    collection
        .iter_mut()
        .find(|record| record.id == staff_id)
        .ok_or_else(|| EngineError::StaffNotFound {
            staff_id: staff_id.to_string(),
        })
}

/// Recomputes the cached pay of `record` from its current fields.
pub fn recompute(record: &mut StaffPayroll) {
    record.calculated_pay = Some(calculate_all_periods(record));
}

/// Sets the rate of `staff_id` and recomputes its cached pay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayProfile`] for a negative rate or
/// [`EngineError::StaffNotFound`] for an unknown id.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_pay;
/// use staffing_engine::models::{PayPeriod, StaffPayroll};
/// use staffing_engine::payroll::update_rate;
/// use rust_decimal::Decimal;
///
/// let staff: StaffPayroll = serde_json::from_str(r#"{
///     "id": "4", "name": "Emily Davis", "pay_type": "monthly", "rate": "4500"
/// }"#).unwrap();
/// let mut collection = vec![staff];
///
/// let updated = update_rate(&mut collection, "4", Decimal::from(4800)).unwrap();
/// let cached = updated.calculated_pay.unwrap();
/// assert_eq!(cached.monthly, Decimal::from(4800));
/// assert_eq!(cached.daily, calculate_pay(updated, PayPeriod::Daily));
/// ```
pub fn update_rate<'a>(
    collection: &'a mut [StaffPayroll],
    staff_id: &str,
    rate: Decimal,
) -> EngineResult<&'a StaffPayroll> {
    ensure_non_negative("rate", rate)?;
    let record = find_record(collection, staff_id)?;

    let previous = record.rate;
    record.rate = rate;
    recompute(record);

    info!(
        staff_id = %staff_id,
        previous_rate = %previous,
        rate = %rate,
        "Rate updated"
    );

    Ok(&*record)
}

/// Sets the overtime rate of `staff_id` and recomputes its cached pay.
///
/// A zero overtime rate falls back to time-and-a-half when pay is calculated.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayProfile`] for a negative rate or
/// [`EngineError::StaffNotFound`] for an unknown id.
pub fn update_overtime_rate<'a>(
    collection: &'a mut [StaffPayroll],
    staff_id: &str,
    overtime_rate: Decimal,
) -> EngineResult<&'a StaffPayroll> {
    ensure_non_negative("overtime_rate", overtime_rate)?;
    let record = find_record(collection, staff_id)?;

    record.overtime_rate = Some(overtime_rate);
    recompute(record);

    info!(staff_id = %staff_id, overtime_rate = %overtime_rate, "Overtime rate updated");

    Ok(&*record)
}

/// Sets the monthly night-shift allowance of `staff_id` and recomputes its
/// cached pay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayProfile`] for a negative allowance or
/// [`EngineError::StaffNotFound`] for an unknown id.
pub fn update_night_shift_allowance<'a>(
    collection: &'a mut [StaffPayroll],
    staff_id: &str,
    allowance: Decimal,
) -> EngineResult<&'a StaffPayroll> {
    ensure_non_negative("night_shift_allowance", allowance)?;
    let record = find_record(collection, staff_id)?;

    record.night_shift_allowance = Some(allowance);
    recompute(record);

    info!(
        staff_id = %staff_id,
        night_shift_allowance = %allowance,
        "Night-shift allowance updated"
    );

    Ok(&*record)
}

/// Applies an attendance summary to `staff_id`.
///
/// Replaces the attendance counts, hours, days, overtime hours and night
/// shifts, recomputes the stored late penalty from the late count, and then
/// recomputes the cached pay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayProfile`] for negative hours or
/// [`EngineError::StaffNotFound`] for an unknown id.
pub fn update_attendance<'a>(
    collection: &'a mut [StaffPayroll],
    staff_id: &str,
    summary: &AttendanceSummary,
) -> EngineResult<&'a StaffPayroll> {
    ensure_non_negative("hours_worked", summary.hours_worked)?;
    ensure_non_negative("overtime_hours", summary.overtime_hours)?;
    let record = find_record(collection, staff_id)?;

    record.attendance_data = summary.counts;
    record.hours_worked = Some(summary.hours_worked);
    record.days_worked = Some(summary.days_worked);
    record.overtime_hours = summary.overtime_hours;
    record.night_shifts = summary.night_shifts;
    record.late_penalty = monthly_late_penalty(summary.counts.late);
    recompute(record);

    info!(
        staff_id = %staff_id,
        late = summary.counts.late,
        hours_worked = %summary.hours_worked,
        night_shifts = summary.night_shifts,
        "Attendance applied to payroll"
    );

    Ok(&*record)
}
