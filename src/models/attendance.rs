//! Attendance models.
//!
//! An [`AttendanceRecord`] is opened by a check-in scan and closed by a
//! check-out scan. [`AttendanceCounts`] is the per-status tally payroll
//! consumes.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance outcome for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// Checked in after the start-of-work cut-off.
    Late,
    /// Did not attend.
    Absent,
    /// On approved leave.
    OnLeave,
}

/// A single day's attendance for a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The staff member who scanned.
    pub staff_id: String,
    /// Denormalized staff name for display.
    pub staff_name: String,
    /// When the staff member checked in.
    pub check_in_time: NaiveDateTime,
    /// When the staff member checked out; `None` while still clocked in.
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    /// Attendance outcome.
    pub status: AttendanceStatus,
    /// Hours worked beyond a standard shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<Decimal>,
    /// Whether the record was a night shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_shift: Option<bool>,
}

impl AttendanceRecord {
    /// Returns true while the staff member is still clocked in.
    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }

    /// The calendar day the record belongs to (the check-in date).
    pub fn day(&self) -> NaiveDate {
        self.check_in_time.date()
    }

    /// Hours between check-in and check-out, or `None` while open.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     staff_id: "1".to_string(),
    ///     staff_name: "John Smith".to_string(),
    ///     check_in_time: NaiveDateTime::parse_from_str("2025-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     check_out_time: Some(NaiveDateTime::parse_from_str("2025-03-10 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     status: AttendanceStatus::Present,
    ///     overtime: None,
    ///     night_shift: None,
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(85, 1)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.check_out_time.map(|out| {
            let minutes = (out - self.check_in_time).num_minutes().max(0);
            Decimal::from(minutes) / Decimal::from(60)
        })
    }
}

/// Attendance tallies for one staff member over a pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Days present on time.
    #[serde(default)]
    pub present: u32,
    /// Late arrivals.
    #[serde(default)]
    pub late: u32,
    /// Absences.
    #[serde(default)]
    pub absent: u32,
    /// Days on leave.
    #[serde(default)]
    pub on_leave: u32,
}

impl AttendanceCounts {
    /// Adds one occurrence of `status`.
    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::OnLeave => self.on_leave += 1,
        }
    }
}
