//! Payroll report models.
//!
//! These are the read-side structures handed to report exporters and
//! dashboards. Producing them never mutates payroll records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceCounts, PayPeriod, PayType};

/// One staff member's line in a [`PayrollReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPayReport {
    /// The staff member's id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job role.
    pub role: String,
    /// How `rate` is denominated.
    pub pay_type: PayType,
    /// The staff member's rate.
    pub rate: Decimal,
    /// Net pay for the period.
    pub pay: Decimal,
    /// Overtime contribution for the period.
    pub overtime: Decimal,
    /// Night-shift contribution for the period.
    pub night_shift: Decimal,
    /// Late penalty deducted for the period.
    pub late_penalty: Decimal,
    /// Attendance tallies behind the figures.
    pub attendance_data: AttendanceCounts,
}

/// Payroll totals over a staff collection for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The period every amount is expressed in.
    pub period: PayPeriod,
    /// Sum of net pay.
    pub total_payroll: Decimal,
    /// Sum of overtime contributions.
    pub total_overtime: Decimal,
    /// Sum of night-shift contributions.
    pub total_night_shift: Decimal,
    /// Sum of late penalties.
    pub total_late_penalties: Decimal,
    /// Net payroll. Penalties are already netted out of each staff member's pay.
    pub net_payroll: Decimal,
    /// Per-staff lines, in collection order.
    pub staff_breakdown: Vec<StaffPayReport>,
}

/// Dashboard statistics over a payroll collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of payroll records.
    pub total_staff: u32,
    /// Records with status active.
    pub active_staff: u32,
    /// Records with status inactive.
    pub inactive_staff: u32,
    /// Records paid hourly.
    pub hourly_staff: u32,
    /// Records paid monthly.
    pub monthly_staff: u32,
    /// Mean hourly rate of hourly staff; zero when there are none.
    pub average_hourly_rate: Decimal,
    /// Sum of monthly salaries.
    pub total_monthly_salaries: Decimal,
    /// Monthly salaries plus hourly staff at their hours (or the standard month).
    pub estimated_monthly_total: Decimal,
    /// Late arrivals across all staff.
    pub total_late_instances: u32,
    /// Mean late arrivals per staff member, one decimal place.
    pub average_late_per_staff: Decimal,
    /// Sum of stored late penalties.
    pub total_late_penalties: Decimal,
    /// Overtime hours across all staff.
    pub total_overtime_hours: Decimal,
    /// Overtime hours priced at each staff member's effective overtime rate.
    pub total_overtime_pay: Decimal,
    /// Night shifts across all staff.
    pub total_night_shifts: u32,
    /// Sum of monthly night-shift allowances.
    pub total_night_shift_allowance: Decimal,
    /// Days on leave across all staff.
    pub total_on_leave: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_serializes() {
        let report = PayrollReport {
            period: PayPeriod::Weekly,
            total_payroll: Decimal::ZERO,
            total_overtime: Decimal::ZERO,
            total_night_shift: Decimal::ZERO,
            total_late_penalties: Decimal::ZERO,
            net_payroll: Decimal::ZERO,
            staff_breakdown: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period"], "weekly");
        assert_eq!(json["total_payroll"], "0");
        assert!(json["staff_breakdown"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_default_summary_is_all_zero() {
        let summary = PayrollSummary::default();
        assert_eq!(summary.total_staff, 0);
        assert_eq!(summary.average_hourly_rate, Decimal::ZERO);
        assert_eq!(summary.estimated_monthly_total, Decimal::ZERO);
    }
}
