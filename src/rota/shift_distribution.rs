//! Working shift rotation.

use crate::models::{DayOfWeek, RotaEntry, ShiftType};

/// Assigns morning, afternoon and night in rotation to every weekday that is
/// neither off nor leave, Monday to Sunday.
///
/// The rotation restarts at morning for each entry.
pub fn distribute_shifts(entry: &mut RotaEntry) {
    let mut rotation = ShiftType::WORKING.into_iter().cycle();

    for day in DayOfWeek::ALL {
        if matches!(entry.shift(day), ShiftType::Off | ShiftType::Leave) {
            continue;
        }
        if let Some(shift) = rotation.next() {
            entry.set_shift(day, shift);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn create_entry() -> RotaEntry {
        let staff = StaffMember::new("1", "John Smith", "Waiter", "Service");
        RotaEntry::filled(&staff, ShiftType::Morning)
    }

    #[test]
    fn test_full_week_rotation() {
        let mut entry = create_entry();
        distribute_shifts(&mut entry);

        assert_eq!(entry.monday, ShiftType::Morning);
        assert_eq!(entry.tuesday, ShiftType::Afternoon);
        assert_eq!(entry.wednesday, ShiftType::Night);
        assert_eq!(entry.thursday, ShiftType::Morning);
        assert_eq!(entry.friday, ShiftType::Afternoon);
        assert_eq!(entry.saturday, ShiftType::Night);
        assert_eq!(entry.sunday, ShiftType::Morning);
    }

    #[test]
    fn test_rotation_skips_off_and_leave_days() {
        let mut entry = create_entry();
        entry.set_shift(DayOfWeek::Tuesday, ShiftType::Off);
        entry.set_shift(DayOfWeek::Wednesday, ShiftType::Leave);
        distribute_shifts(&mut entry);

        assert_eq!(entry.monday, ShiftType::Morning);
        assert_eq!(entry.tuesday, ShiftType::Off);
        assert_eq!(entry.wednesday, ShiftType::Leave);
        assert_eq!(entry.thursday, ShiftType::Afternoon);
        assert_eq!(entry.friday, ShiftType::Night);
        assert_eq!(entry.saturday, ShiftType::Morning);
    }

    #[test]
    fn test_all_days_unavailable_is_noop() {
        let staff = StaffMember::new("1", "John Smith", "Waiter", "Service");
        let mut entry = RotaEntry::filled(&staff, ShiftType::Leave);
        distribute_shifts(&mut entry);
        assert_eq!(entry.count(ShiftType::Leave), 7);
    }
}
