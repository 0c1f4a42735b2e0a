//! Off-day assignment.

use tracing::debug;

use crate::models::{DayOfWeek, RotaEntry, RotaSettings, ShiftType};

/// Marks up to `settings.off_days_per_staff` non-leave weekdays as
/// [`ShiftType::Off`] and returns the days chosen.
///
/// Preferred off days are taken first, in the order listed; the remaining
/// slots are filled from the other available days Monday to Sunday. When
/// fewer days are available than requested every available day is taken.
pub fn assign_off_days(entry: &mut RotaEntry, settings: &RotaSettings) -> Vec<DayOfWeek> {
    let wanted = settings.off_days_per_staff as usize;
    let available: Vec<DayOfWeek> = DayOfWeek::ALL
        .into_iter()
        .filter(|day| entry.shift(*day) != ShiftType::Leave)
        .collect();

    let mut chosen: Vec<DayOfWeek> = Vec::with_capacity(wanted);
    let preferred = settings
        .preferred_off_days
        .iter()
        .copied()
        .filter(|day| available.contains(day));
    let others = available
        .iter()
        .copied()
        .filter(|day| !settings.preferred_off_days.contains(day));

    for day in preferred.chain(others) {
        if chosen.len() == wanted {
            break;
        }
        if !chosen.contains(&day) {
            chosen.push(day);
        }
    }

    for day in &chosen {
        entry.set_shift(*day, ShiftType::Off);
    }

    debug!(
        staff_id = %entry.staff_id,
        requested = wanted,
        assigned = chosen.len(),
        "Assigned off days"
    );

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn create_entry() -> RotaEntry {
        let staff = StaffMember::new("1", "John Smith", "Waiter", "Service");
        RotaEntry::filled(&staff, ShiftType::Morning)
    }

    fn settings(off_days: u32, preferred: Vec<DayOfWeek>) -> RotaSettings {
        RotaSettings {
            staff_per_shift: 3,
            off_days_per_staff: off_days,
            preferred_off_days: preferred,
        }
    }

    #[test]
    fn test_preferred_days_taken_first() {
        let mut entry = create_entry();
        let chosen = assign_off_days(
            &mut entry,
            &settings(2, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]),
        );

        assert_eq!(chosen, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]);
        assert_eq!(entry.saturday, ShiftType::Off);
        assert_eq!(entry.sunday, ShiftType::Off);
        assert_eq!(entry.count(ShiftType::Off), 2);
    }

    #[test]
    fn test_preferred_order_is_respected() {
        let mut entry = create_entry();
        let chosen = assign_off_days(
            &mut entry,
            &settings(1, vec![DayOfWeek::Wednesday, DayOfWeek::Monday]),
        );
        assert_eq!(chosen, vec![DayOfWeek::Wednesday]);
    }

    #[test]
    fn test_remaining_slots_filled_in_weekday_order() {
        let mut entry = create_entry();
        let chosen = assign_off_days(&mut entry, &settings(3, vec![DayOfWeek::Sunday]));
        assert_eq!(
            chosen,
            vec![DayOfWeek::Sunday, DayOfWeek::Monday, DayOfWeek::Tuesday]
        );
    }

    #[test]
    fn test_preferred_day_on_leave_is_skipped() {
        let mut entry = create_entry();
        entry.set_shift(DayOfWeek::Saturday, ShiftType::Leave);

        let chosen = assign_off_days(
            &mut entry,
            &settings(2, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]),
        );

        assert_eq!(chosen, vec![DayOfWeek::Sunday, DayOfWeek::Monday]);
        assert_eq!(entry.saturday, ShiftType::Leave);
    }

    #[test]
    fn test_saturates_at_available_days() {
        let mut entry = create_entry();
        for day in [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
        ] {
            entry.set_shift(day, ShiftType::Leave);
        }

        let chosen = assign_off_days(&mut entry, &settings(4, vec![]));
        assert_eq!(chosen.len(), 2);
        assert_eq!(entry.count(ShiftType::Leave), 5);
        assert_eq!(entry.count(ShiftType::Off), 2);
    }

    #[test]
    fn test_zero_off_days() {
        let mut entry = create_entry();
        let chosen = assign_off_days(&mut entry, &settings(0, vec![DayOfWeek::Sunday]));
        assert!(chosen.is_empty());
        assert_eq!(entry.count(ShiftType::Morning), 7);
    }

    #[test]
    fn test_duplicate_preferred_days_count_once() {
        let mut entry = create_entry();
        let chosen = assign_off_days(
            &mut entry,
            &settings(2, vec![DayOfWeek::Friday, DayOfWeek::Friday]),
        );
        assert_eq!(chosen, vec![DayOfWeek::Friday, DayOfWeek::Monday]);
    }
}
