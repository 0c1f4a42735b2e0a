//! Per-staff attendance summaries.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceCounts, AttendanceRecord, AttendanceStatus};

/// Attendance figures for one staff member, in the shape payroll consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Records per status.
    #[serde(default)]
    pub counts: AttendanceCounts,
    /// Hours worked across closed records.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Distinct days with a present or late record.
    #[serde(default)]
    pub days_worked: u32,
    /// Summed overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Records flagged as night shifts.
    #[serde(default)]
    pub night_shifts: u32,
}

/// Summarizes the records belonging to `staff_id`.
///
/// Open records count towards the status tallies and days worked but
/// contribute no hours.
pub fn summarize_attendance(records: &[AttendanceRecord], staff_id: &str) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    let mut days = BTreeSet::new();

    for record in records.iter().filter(|r| r.staff_id == staff_id) {
        summary.counts.record(record.status);

        if matches!(record.status, AttendanceStatus::Present | AttendanceStatus::Late) {
            days.insert(record.day());
        }
        if let Some(hours) = record.worked_hours() {
            summary.hours_worked = summary.hours_worked.saturating_add(hours);
        }
        if let Some(overtime) = record.overtime {
            summary.overtime_hours = summary.overtime_hours.saturating_add(overtime);
        }
        if record.night_shift == Some(true) {
            summary.night_shifts += 1;
        }
    }

    summary.days_worked = days.len() as u32;
    summary
}
