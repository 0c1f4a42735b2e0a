//! Cross-staff balancing pass.
//!
//! A best-effort, single-pass heuristic. For each weekday the shift counts
//! are taken once, then up to three moves are made:
//!
//! 1. morning over target and afternoon under target: morning to afternoon
//! 2. morning over target, afternoon at or above target, night under target:
//!    morning to night
//! 3. afternoon over target and night under target: afternoon to night
//!
//! Each rule moves at most one staff member, the first in rota order on the
//! source shift. The pass does not iterate to convergence.

use tracing::debug;

use crate::models::{DayOfWeek, RotaEntry, ShiftType};

/// A single move made by [`balance_shifts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftMove {
    /// The weekday the move happened on.
    pub day: DayOfWeek,
    /// The staff member moved.
    pub staff_id: String,
    /// The shift they were moved off.
    pub from: ShiftType,
    /// The shift they were moved onto.
    pub to: ShiftType,
}

#[derive(Debug, Clone, Copy)]
struct DayCounts {
    morning: usize,
    afternoon: usize,
    night: usize,
}

fn count_day(rota: &[RotaEntry], day: DayOfWeek) -> DayCounts {
    let count = |shift: ShiftType| rota.iter().filter(|e| e.shift(day) == shift).count();
    DayCounts {
        morning: count(ShiftType::Morning),
        afternoon: count(ShiftType::Afternoon),
        night: count(ShiftType::Night),
    }
}

/// Runs the balancing pass over `rota` and returns the moves made.
///
/// Only cells currently holding the source shift are moved, so leave and
/// off cells are never touched.
pub fn balance_shifts(rota: &mut [RotaEntry], staff_per_shift: u32) -> Vec<ShiftMove> {
    let target = staff_per_shift as usize;
    let mut moves = Vec::new();

    for day in DayOfWeek::ALL {
        let counts = count_day(rota, day);

        let mut rules: Vec<(ShiftType, ShiftType)> = Vec::with_capacity(3);
        if counts.morning > target && counts.afternoon < target {
            rules.push((ShiftType::Morning, ShiftType::Afternoon));
        }
        if counts.morning > target && counts.afternoon >= target && counts.night < target {
            rules.push((ShiftType::Morning, ShiftType::Night));
        }
        if counts.afternoon > target && counts.night < target {
            rules.push((ShiftType::Afternoon, ShiftType::Night));
        }

        for (from, to) in rules {
            if let Some(entry) = rota.iter_mut().find(|e| e.shift(day) == from) {
                entry.set_shift(day, to);
                debug!(
                    day = %day,
                    staff_id = %entry.staff_id,
                    from = %from,
                    to = %to,
                    "Balanced shift"
                );
                moves.push(ShiftMove {
                    day,
                    staff_id: entry.staff_id.clone(),
                    from,
                    to,
                });
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn create_rota(shifts: &[ShiftType]) -> Vec<RotaEntry> {
        shifts
            .iter()
            .enumerate()
            .map(|(i, shift)| {
                let id = (i + 1).to_string();
                let staff = StaffMember::new(id.clone(), format!("Staff {}", id), "Waiter", "Service");
                RotaEntry::filled(&staff, *shift)
            })
            .collect()
    }

    fn on_monday(rota: &[RotaEntry], shift: ShiftType) -> usize {
        rota.iter().filter(|e| e.monday == shift).count()
    }

    #[test]
    fn test_excess_morning_moves_to_short_afternoon() {
        use ShiftType::*;
        let mut rota = create_rota(&[Morning, Morning, Morning]);
        let moves = balance_shifts(&mut rota, 1);

        // Every day has 3 mornings: rule 1 fires, rule 2 does not (afternoon was short).
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0].staff_id, "1");
        assert_eq!(moves[0].to, Afternoon);
        assert_eq!(on_monday(&rota, Morning), 2);
        assert_eq!(on_monday(&rota, Afternoon), 1);
    }

    #[test]
    fn test_excess_morning_moves_to_night_when_afternoon_covered() {
        use ShiftType::*;
        let mut rota = create_rota(&[Morning, Morning, Afternoon]);
        let moves = balance_shifts(&mut rota, 1);

        assert!(moves.iter().all(|m| m.from == Morning && m.to == Night));
        assert_eq!(on_monday(&rota, Morning), 1);
        assert_eq!(on_monday(&rota, Afternoon), 1);
        assert_eq!(on_monday(&rota, Night), 1);
    }

    #[test]
    fn test_excess_afternoon_moves_to_night() {
        use ShiftType::*;
        let mut rota = create_rota(&[Morning, Afternoon, Afternoon]);
        let moves = balance_shifts(&mut rota, 1);

        assert!(moves.iter().all(|m| m.from == Afternoon && m.to == Night));
        assert_eq!(moves[0].staff_id, "2");
        assert_eq!(on_monday(&rota, Night), 1);
    }

    #[test]
    fn test_only_one_move_per_rule() {
        use ShiftType::*;
        let mut rota = create_rota(&[Morning, Morning, Morning, Morning, Morning]);
        balance_shifts(&mut rota, 1);

        // Still unbalanced after a single pass.
        assert_eq!(on_monday(&rota, Morning), 4);
        assert_eq!(on_monday(&rota, Afternoon), 1);
    }

    #[test]
    fn test_leave_and_off_cells_are_never_moved() {
        use ShiftType::*;
        let mut rota = create_rota(&[Leave, Off, Morning, Morning]);
        let moves = balance_shifts(&mut rota, 1);

        assert!(moves.iter().all(|m| m.staff_id == "3"));
        assert_eq!(rota[0].count(Leave), 7);
        assert_eq!(rota[1].count(Off), 7);
    }

    #[test]
    fn test_balanced_day_is_untouched() {
        use ShiftType::*;
        let mut rota = create_rota(&[Morning, Afternoon, Night]);
        assert!(balance_shifts(&mut rota, 1).is_empty());
    }

    #[test]
    fn test_empty_rota() {
        assert!(balance_shifts(&mut [], 3).is_empty());
    }
}
