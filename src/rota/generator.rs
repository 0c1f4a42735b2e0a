//! Rota generation and manual edits.

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayOfWeek, LeaveApplication, RotaEntry, RotaSettings, ShiftType, StaffMember};

use super::balancing::balance_shifts;
use super::leave_overlay::apply_approved_leave;
use super::off_days::assign_off_days;
use super::shift_distribution::distribute_shifts;

/// Generates a fresh weekly rota for `staff`.
///
/// Each staff member starts on morning every day. Approved leave is laid
/// over first, then off days are assigned, then the remaining days rotate
/// through morning, afternoon and night. A single balancing pass across all
/// staff follows. Leave cells are never overwritten.
///
/// The result has one entry per staff member, in input order, and shares
/// nothing with any previous rota.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSettings`] if `settings` are out of range,
/// or [`EngineError::InvalidLeave`] if an approved application ends before it
/// starts.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{RotaSettings, ShiftType, StaffMember};
/// use staffing_engine::rota::generate_rota;
///
/// let staff = vec![StaffMember::new("1", "John Smith", "Waiter", "Service")];
/// let rota = generate_rota(&staff, &[], &RotaSettings::default()).unwrap();
///
/// assert_eq!(rota[0].saturday, ShiftType::Off);
/// assert_eq!(rota[0].sunday, ShiftType::Off);
/// assert_eq!(rota[0].monday, ShiftType::Morning);
/// assert_eq!(rota[0].tuesday, ShiftType::Afternoon);
/// assert_eq!(rota[0].wednesday, ShiftType::Night);
/// ```
pub fn generate_rota(
    staff: &[StaffMember],
    leave: &[LeaveApplication],
    settings: &RotaSettings,
) -> EngineResult<Vec<RotaEntry>> {
    settings.validate()?;
    for application in leave.iter().filter(|a| a.is_approved()) {
        application.validate()?;
    }

    let mut rota: Vec<RotaEntry> = staff
        .iter()
        .map(|member| {
            let mut entry = RotaEntry::filled(member, ShiftType::Morning);
            apply_approved_leave(&mut entry, leave);
            assign_off_days(&mut entry, settings);
            distribute_shifts(&mut entry);
            entry
        })
        .collect();

    let moves = balance_shifts(&mut rota, settings.staff_per_shift);

    info!(
        staff_count = rota.len(),
        staff_per_shift = settings.staff_per_shift,
        off_days_per_staff = settings.off_days_per_staff,
        balancing_moves = moves.len(),
        "Rota generated"
    );

    Ok(rota)
}

/// Overrides a single cell of an existing rota.
///
/// Balancing is not re-run and the new shift is not checked against leave.
///
/// # Errors
///
/// Returns [`EngineError::StaffNotFound`] if no entry has `staff_id`; the
/// rota is left unchanged.
pub fn update_shift<'a>(
    rota: &'a mut [RotaEntry],
    staff_id: &str,
    day: DayOfWeek,
    shift: ShiftType,
) -> EngineResult<&'a RotaEntry> {
    let entry = rota
        .iter_mut()
        .find(|e| e.staff_id == staff_id)
        .ok_or_else(|| EngineError::StaffNotFound {
            staff_id: staff_id.to_string(),
        })?;

    let previous = entry.shift(day);
    entry.set_shift(day, shift);

    info!(
        staff_id = %staff_id,
        day = %day,
        from = %previous,
        to = %shift,
        "Shift updated"
    );

    Ok(&*entry)
}
