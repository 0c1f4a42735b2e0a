//! Check-in and check-out scanning.

use chrono::{Days, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, StaffMember};

use super::policy::AttendancePolicy;

/// What a scan did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "record", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// A new record was opened.
    CheckedIn(AttendanceRecord),
    /// An open record was closed.
    CheckedOut(AttendanceRecord),
}

impl ScanOutcome {
    /// The record that was created or closed.
    pub fn record(&self) -> &AttendanceRecord {
        match self {
            ScanOutcome::CheckedIn(record) | ScanOutcome::CheckedOut(record) => record,
        }
    }
}

/// Records a badge scan for `staff` at `at`.
///
/// - An open record from the same day is closed, as is an open record from
///   the previous day that started at or after `policy.night_shift_start`.
///   A daytime record left open the day before stays open and a new record
///   is started.
/// - Otherwise a closed record for the same day is an error.
/// - Otherwise a new record is opened, `late` when `at` is after
///   `policy.work_start` and `present` otherwise.
///
/// Closing a record sets `overtime` to the hours beyond
/// `policy.standard_shift_hours` (left unset when there are none) and
/// `night_shift` when the shift started at or after
/// `policy.night_shift_start` or ended on a later date.
///
/// # Errors
///
/// Returns [`EngineError::AlreadyCheckedOut`] when the staff member has
/// already completed a record for that day.
///
/// # Examples
///
/// ```
/// use staffing_engine::attendance::{AttendancePolicy, ScanOutcome, record_scan};
/// use staffing_engine::models::{AttendanceStatus, StaffMember};
/// use chrono::NaiveDateTime;
///
/// let staff = StaffMember::new("1", "John Smith", "Waiter", "Service");
/// let policy = AttendancePolicy::default();
/// let mut records = Vec::new();
///
/// let at = NaiveDateTime::parse_from_str("2025-03-10 09:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let outcome = record_scan(&mut records, &staff, at, &policy).unwrap();
///
/// assert!(matches!(outcome, ScanOutcome::CheckedIn(_)));
/// assert_eq!(outcome.record().status, AttendanceStatus::Late);
/// ```
pub fn record_scan(
    records: &mut Vec<AttendanceRecord>,
    staff: &StaffMember,
    at: NaiveDateTime,
    policy: &AttendancePolicy,
) -> EngineResult<ScanOutcome> {
    let today = at.date();
    let yesterday = today.checked_sub_days(Days::new(1));

    let open = records.iter_mut().find(|record| {
        record.staff_id == staff.id
            && record.is_open()
            && (record.day() == today
                || (Some(record.day()) == yesterday
                    && record.check_in_time.time() >= policy.night_shift_start))
    });

    if let Some(record) = open {
        close_record(record, at, policy);
        info!(
            staff_id = %staff.id,
            record_id = %record.id,
            overtime = ?record.overtime,
            night_shift = ?record.night_shift,
            "Checked out"
        );
        return Ok(ScanOutcome::CheckedOut(record.clone()));
    }

    if records
        .iter()
        .any(|record| record.staff_id == staff.id && record.day() == today)
    {
        return Err(EngineError::AlreadyCheckedOut {
            staff_id: staff.id.clone(),
            date: today,
        });
    }

    let status = if at.time() > policy.work_start {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    };

    let record = AttendanceRecord {
        id: Uuid::new_v4().to_string(),
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        check_in_time: at,
        check_out_time: None,
        status,
        overtime: None,
        night_shift: None,
    };

    info!(
        staff_id = %staff.id,
        record_id = %record.id,
        status = ?status,
        "Checked in"
    );

    records.push(record.clone());
    Ok(ScanOutcome::CheckedIn(record))
}

fn close_record(record: &mut AttendanceRecord, at: NaiveDateTime, policy: &AttendancePolicy) {
    record.check_out_time = Some(at);

    let worked = record.worked_hours().unwrap_or(Decimal::ZERO);
    let overtime = worked - policy.standard_shift_hours;
    record.overtime = (overtime > Decimal::ZERO).then_some(overtime);

    let night = record.check_in_time.time() >= policy.night_shift_start || at.date() > record.day();
    record.night_shift = Some(night);
}
