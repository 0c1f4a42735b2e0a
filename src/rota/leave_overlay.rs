//! Approved leave overlay.

use crate::models::{DayOfWeek, LeaveApplication, RotaEntry, ShiftType};

/// Marks every weekday covered by the staff member's approved leave as
/// [`ShiftType::Leave`].
///
/// Dates are mapped to weekdays Monday-first. Pending and rejected
/// applications, and applications for other staff, are ignored. Returns the
/// number of distinct weekdays on leave after the overlay.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{
///     DayOfWeek, LeaveApplication, LeaveStatus, LeaveType, RotaEntry, ShiftType, StaffMember,
/// };
/// use staffing_engine::rota::apply_approved_leave;
/// use chrono::NaiveDate;
///
/// let staff = StaffMember::new("1", "John Smith", "Waiter", "Service");
/// let mut entry = RotaEntry::filled(&staff, ShiftType::Morning);
/// let leave = LeaveApplication {
///     id: "LV001".to_string(),
///     staff_id: "1".to_string(),
///     // Tuesday and Wednesday
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     leave_type: LeaveType::Annual,
///     status: LeaveStatus::Approved,
///     days: 2,
///     is_paid: true,
/// };
///
/// assert_eq!(apply_approved_leave(&mut entry, &[leave]), 2);
/// assert_eq!(entry.shift(DayOfWeek::Tuesday), ShiftType::Leave);
/// assert_eq!(entry.shift(DayOfWeek::Monday), ShiftType::Morning);
/// ```
pub fn apply_approved_leave(entry: &mut RotaEntry, leave: &[LeaveApplication]) -> usize {
    let staff_id = entry.staff_id.clone();
    let applications = leave
        .iter()
        .filter(|application| application.is_approved() && application.staff_id == staff_id);

    for application in applications {
        // Seven consecutive dates already cover every weekday.
        for date in application.covered_dates().take(7) {
            entry.set_shift(DayOfWeek::from_date(date), ShiftType::Leave);
        }
    }

    entry.count(ShiftType::Leave)
}
