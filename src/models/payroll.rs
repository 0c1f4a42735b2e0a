//! Payroll models.
//!
//! [`StaffPayroll`] is the pay profile of one staff member together with its
//! cached [`CalculatedPay`]. [`PayProfile`] is the input used to enrol a
//! staff member onto payroll.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceCounts, PayPeriod};

/// How a staff member's `rate` is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// `rate` is currency per hour.
    Hourly,
    /// `rate` is currency per month.
    Monthly,
}

/// Whether a payroll record is currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Being paid.
    #[default]
    Active,
    /// Kept for history only.
    Inactive,
}

/// Pay for a staff member at each period scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatedPay {
    /// Daily pay.
    pub daily: Decimal,
    /// Weekly pay.
    pub weekly: Decimal,
    /// Monthly pay.
    pub monthly: Decimal,
}

impl CalculatedPay {
    /// Returns the amount for `period`.
    pub fn get(&self, period: PayPeriod) -> Decimal {
        match period {
            PayPeriod::Daily => self.daily,
            PayPeriod::Weekly => self.weekly,
            PayPeriod::Monthly => self.monthly,
        }
    }
}

/// A staff member's pay profile.
///
/// `calculated_pay`, when present, always equals the result of
/// [`calculate_all_periods`](crate::calculation::calculate_all_periods) on
/// the rest of the record. The update operations in [`crate::payroll`]
/// maintain this by recomputing after every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPayroll {
    /// The staff member's id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job role.
    #[serde(default)]
    pub role: String,
    /// How `rate` is denominated.
    pub pay_type: PayType,
    /// Currency per hour or per month depending on `pay_type`.
    pub rate: Decimal,
    /// Hours worked in the month (hourly staff).
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Days worked in the month.
    #[serde(default)]
    pub days_worked: Option<u32>,
    /// Employment start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Whether the record is active.
    #[serde(default)]
    pub status: PayrollStatus,
    /// Attendance tallies for the month.
    #[serde(default)]
    pub attendance_data: AttendanceCounts,
    /// Monthly late penalty (late count times the per-instance penalty).
    #[serde(default)]
    pub late_penalty: Decimal,
    /// Overtime hours in the month.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Overtime hourly rate; falls back to `rate * 1.5` when unset.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Night shifts worked in the month.
    #[serde(default)]
    pub night_shifts: u32,
    /// Monthly night-shift allowance.
    #[serde(default)]
    pub night_shift_allowance: Option<Decimal>,
    /// Cached pay at each period scale.
    #[serde(default)]
    pub calculated_pay: Option<CalculatedPay>,
}

/// Input for enrolling a staff member onto payroll.
///
/// Attendance-derived figures (`attendance_data`, `hours_worked`,
/// `overtime_hours`, `night_shifts`) are supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayProfile {
    /// The staff member's id.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Job role.
    #[serde(default)]
    pub role: String,
    /// How `rate` is denominated.
    pub pay_type: PayType,
    /// Currency per hour or per month depending on `pay_type`.
    pub rate: Decimal,
    /// Overtime hourly rate.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Monthly night-shift allowance.
    #[serde(default)]
    pub night_shift_allowance: Option<Decimal>,
    /// Hours worked in the month.
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Days worked in the month.
    #[serde(default)]
    pub days_worked: Option<u32>,
    /// Employment start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Attendance tallies for the month.
    #[serde(default)]
    pub attendance_data: AttendanceCounts,
    /// Overtime hours in the month.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Night shifts worked in the month.
    #[serde(default)]
    pub night_shifts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_staff_payroll() {
        let json = r#"{
            "id": "4",
            "name": "Emily Davis",
            "pay_type": "monthly",
            "rate": "4500"
        }"#;

        let staff: StaffPayroll = serde_json::from_str(json).unwrap();
        assert_eq!(staff.pay_type, PayType::Monthly);
        assert_eq!(staff.rate, dec("4500"));
        assert_eq!(staff.hours_worked, None);
        assert_eq!(staff.status, PayrollStatus::Active);
        assert_eq!(staff.attendance_data, AttendanceCounts::default());
        assert_eq!(staff.overtime_hours, Decimal::ZERO);
        assert_eq!(staff.calculated_pay, None);
    }

    #[test]
    fn test_deserialize_full_staff_payroll() {
        let json = r#"{
            "id": "1",
            "name": "John Smith",
            "role": "Waiter",
            "pay_type": "hourly",
            "rate": "15",
            "hours_worked": "78",
            "days_worked": 10,
            "start_date": "2023-07-15",
            "status": "inactive",
            "attendance_data": { "present": 18, "late": 2, "absent": 1, "on_leave": 0 },
            "late_penalty": "50",
            "overtime_hours": "12",
            "overtime_rate": "22.5",
            "night_shifts": 4,
            "night_shift_allowance": "80",
            "calculated_pay": { "daily": "120", "weekly": "600", "monthly": "2400" }
        }"#;

        let staff: StaffPayroll = serde_json::from_str(json).unwrap();
        assert_eq!(staff.status, PayrollStatus::Inactive);
        assert_eq!(staff.attendance_data.late, 2);
        assert_eq!(staff.overtime_rate, Some(dec("22.5")));
        assert_eq!(staff.night_shifts, 4);
        assert_eq!(staff.calculated_pay.unwrap().get(PayPeriod::Weekly), dec("600"));
    }

    #[test]
    fn test_pay_type_serialization() {
        assert_eq!(serde_json::to_string(&PayType::Hourly).unwrap(), "\"hourly\"");
        assert_eq!(serde_json::to_string(&PayType::Monthly).unwrap(), "\"monthly\"");
    }

    #[test]
    fn test_calculated_pay_get_each_period() {
        let pay = CalculatedPay {
            daily: dec("1"),
            weekly: dec("2"),
            monthly: dec("3"),
        };
        assert_eq!(pay.get(PayPeriod::Daily), dec("1"));
        assert_eq!(pay.get(PayPeriod::Weekly), dec("2"));
        assert_eq!(pay.get(PayPeriod::Monthly), dec("3"));
    }

    #[test]
    fn test_deserialize_pay_profile_defaults() {
        let json = r#"{
            "staff_id": "5",
            "name": "Robert Brown",
            "pay_type": "hourly",
            "rate": "16"
        }"#;

        let profile: PayProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.overtime_rate, None);
        assert_eq!(profile.night_shift_allowance, None);
        assert_eq!(profile.night_shifts, 0);
        assert_eq!(profile.overtime_hours, Decimal::ZERO);
    }
}
