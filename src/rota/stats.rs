//! Shift statistics for reporting.

use rust_decimal::Decimal;

use crate::models::{RotaEntry, ShiftPercentages, ShiftStats, ShiftType};

/// Counts every cell of `rota` by shift type.
///
/// Percentages are of the total cell count, rounded to two decimal places,
/// and are all zero for an empty rota.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{RotaSettings, StaffMember};
/// use staffing_engine::rota::{compute_shift_stats, generate_rota};
///
/// let staff = vec![
///     StaffMember::new("1", "John Smith", "Waiter", "Service"),
///     StaffMember::new("2", "Sarah Johnson", "Chef", "Kitchen"),
/// ];
/// let rota = generate_rota(&staff, &[], &RotaSettings::default()).unwrap();
/// let stats = compute_shift_stats(&rota);
///
/// assert_eq!(stats.total, 14);
/// assert_eq!(stats.off, 4);
/// ```
pub fn compute_shift_stats(rota: &[RotaEntry]) -> ShiftStats {
    let mut stats = ShiftStats::default();

    for (_, shift) in rota.iter().flat_map(|entry| entry.shifts()) {
        match shift {
            ShiftType::Morning => stats.morning += 1,
            ShiftType::Afternoon => stats.afternoon += 1,
            ShiftType::Night => stats.night += 1,
            ShiftType::Off => stats.off += 1,
            ShiftType::Leave => stats.leave += 1,
        }
        stats.total += 1;
    }

    if stats.total > 0 {
        let total = Decimal::from(stats.total);
        let percent = |count: u32| (Decimal::from(count) * Decimal::ONE_HUNDRED / total).round_dp(2);
        stats.percentages = ShiftPercentages {
            morning: percent(stats.morning),
            afternoon: percent(stats.afternoon),
            night: percent(stats.night),
            off: percent(stats.off),
            leave: percent(stats.leave),
        };
    }

    stats
}
