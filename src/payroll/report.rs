//! Read-side payroll aggregation.
//!
//! Nothing here mutates the records it reads.

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{STANDARD_MONTHLY_HOURS, calculate_pay_breakdown, effective_overtime_rate};
use crate::models::{
    PayPeriod, PayType, PayrollReport, PayrollStatus, PayrollSummary, StaffPayReport, StaffPayroll,
};

/// Builds a payroll report for `period`.
///
/// Each staff member's pay is their cached `calculated_pay` for the period,
/// or a fresh calculation when nothing is cached. Overtime, night-shift and
/// penalty columns are always taken from a fresh pay breakdown.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{PayPeriod, StaffPayroll};
/// use staffing_engine::payroll::generate_report;
/// use rust_decimal::Decimal;
///
/// let staff: Vec<StaffPayroll> = serde_json::from_str(r#"[
///     { "id": "1", "name": "John Smith", "pay_type": "hourly", "rate": "15", "hours_worked": "160" },
///     { "id": "4", "name": "Emily Davis", "pay_type": "monthly", "rate": "4500" }
/// ]"#).unwrap();
///
/// let report = generate_report(&staff, PayPeriod::Monthly);
/// assert_eq!(report.total_payroll, Decimal::from(6900));
/// assert_eq!(report.staff_breakdown.len(), 2);
/// ```
pub fn generate_report(collection: &[StaffPayroll], period: PayPeriod) -> PayrollReport {
    let mut total_payroll = Decimal::ZERO;
    let mut total_overtime = Decimal::ZERO;
    let mut total_night_shift = Decimal::ZERO;
    let mut total_late_penalties = Decimal::ZERO;

    let staff_breakdown: Vec<StaffPayReport> = collection
        .iter()
        .map(|staff| {
            let breakdown = calculate_pay_breakdown(staff, period);
            let pay = staff
                .calculated_pay
                .map(|cached| cached.get(period))
                .unwrap_or(breakdown.total);

            total_payroll = total_payroll.saturating_add(pay);
            total_overtime = total_overtime.saturating_add(breakdown.overtime_pay);
            total_night_shift = total_night_shift.saturating_add(breakdown.night_shift_pay);
            total_late_penalties = total_late_penalties.saturating_add(breakdown.late_penalty);

            StaffPayReport {
                id: staff.id.clone(),
                name: staff.name.clone(),
                role: staff.role.clone(),
                pay_type: staff.pay_type,
                rate: staff.rate,
                pay,
                overtime: breakdown.overtime_pay,
                night_shift: breakdown.night_shift_pay,
                late_penalty: breakdown.late_penalty,
                attendance_data: staff.attendance_data,
            }
        })
        .collect();

    info!(
        period = %period,
        staff_count = staff_breakdown.len(),
        total_payroll = %total_payroll.round_dp(2),
        "Payroll report generated"
    );

    PayrollReport {
        period,
        total_payroll,
        total_overtime,
        total_night_shift,
        total_late_penalties,
        net_payroll: total_payroll,
        staff_breakdown,
    }
}

/// Computes dashboard statistics over `collection`.
///
/// Hourly staff without recorded hours are estimated at the standard month.
/// Overtime pay uses each record's effective overtime rate.
pub fn summarize_payroll(collection: &[StaffPayroll]) -> PayrollSummary {
    let mut summary = PayrollSummary::default();
    let mut hourly_rate_sum = Decimal::ZERO;
    let mut hourly_estimate = Decimal::ZERO;

    for staff in collection {
        summary.total_staff += 1;
        match staff.status {
            PayrollStatus::Active => summary.active_staff += 1,
            PayrollStatus::Inactive => summary.inactive_staff += 1,
        }

        match staff.pay_type {
            PayType::Hourly => {
                summary.hourly_staff += 1;
                hourly_rate_sum = hourly_rate_sum.saturating_add(staff.rate);
                let hours = staff
                    .hours_worked
                    .filter(|h| !h.is_zero())
                    .unwrap_or(Decimal::from(STANDARD_MONTHLY_HOURS));
                hourly_estimate = hourly_estimate.saturating_add(staff.rate.saturating_mul(hours));
            }
            PayType::Monthly => {
                summary.monthly_staff += 1;
                summary.total_monthly_salaries = summary.total_monthly_salaries.saturating_add(staff.rate);
            }
        }

        summary.total_late_instances = summary
            .total_late_instances
            .saturating_add(staff.attendance_data.late);
        summary.total_late_penalties = summary.total_late_penalties.saturating_add(staff.late_penalty);
        summary.total_overtime_hours = summary.total_overtime_hours.saturating_add(staff.overtime_hours);
        summary.total_overtime_pay = summary
            .total_overtime_pay
            .saturating_add(staff.overtime_hours.saturating_mul(effective_overtime_rate(staff)));
        summary.total_night_shifts = summary.total_night_shifts.saturating_add(staff.night_shifts);
        summary.total_night_shift_allowance = summary
            .total_night_shift_allowance
            .saturating_add(staff.night_shift_allowance.unwrap_or_default());
        summary.total_on_leave = summary.total_on_leave.saturating_add(staff.attendance_data.on_leave);
    }

    if summary.hourly_staff > 0 {
        summary.average_hourly_rate = hourly_rate_sum / Decimal::from(summary.hourly_staff);
    }
    if summary.total_staff > 0 {
        summary.average_late_per_staff = (Decimal::from(summary.total_late_instances)
            / Decimal::from(summary.total_staff))
        .round_dp(1);
    }
    summary.estimated_monthly_total = summary.total_monthly_salaries.saturating_add(hourly_estimate);

    summary
}
