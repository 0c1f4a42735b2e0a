//! Leave application model.
//!
//! Leave applications cover an inclusive date range. Only applications with
//! status [`LeaveStatus::Approved`] take part in rota generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of leave requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (holiday) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Parental leave.
    Parental,
    /// Unpaid leave.
    Unpaid,
    /// Compassionate leave.
    Compassionate,
}

/// Review state of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; blocks the covered days on the rota.
    Approved,
    /// Rejected; has no effect.
    Rejected,
}

/// A request for leave by a staff member.
///
/// # Example
///
/// ```
/// use staffing_engine::models::{LeaveApplication, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let leave = LeaveApplication {
///     id: "leave_001".to_string(),
///     staff_id: "1".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     leave_type: LeaveType::Annual,
///     status: LeaveStatus::Approved,
///     days: 3,
///     is_paid: true,
/// };
///
/// assert!(leave.is_approved());
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()));
/// assert_eq!(leave.covered_dates().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// Unique identifier for the application.
    pub id: String,
    /// The staff member the leave belongs to.
    pub staff_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// Review state.
    pub status: LeaveStatus,
    /// Number of leave days charged.
    #[serde(default)]
    pub days: u32,
    /// Whether the leave is paid.
    #[serde(default)]
    pub is_paid: bool,
}

impl LeaveApplication {
    /// Returns true if the application has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if `date` falls within the inclusive leave range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every calendar date in the inclusive leave range.
    ///
    /// Yields nothing when the start date is after the end date.
    pub fn covered_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }

    /// Checks that the date range is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeave`] if the start date is after the end date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidLeave {
                leave_id: self.id.clone(),
                message: format!(
                    "start date {} is after end date {}",
                    self.start_date, self.end_date
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_leave(start: NaiveDate, end: NaiveDate, status: LeaveStatus) -> LeaveApplication {
        LeaveApplication {
            id: "leave_001".to_string(),
            staff_id: "1".to_string(),
            start_date: start,
            end_date: end,
            leave_type: LeaveType::Sick,
            status,
            days: 1,
            is_paid: true,
        }
    }

    #[test]
    fn test_deserialize_leave_application() {
        let json = r#"{
            "id": "leave_002",
            "staff_id": "4",
            "start_date": "2025-03-17",
            "end_date": "2025-03-19",
            "type": "compassionate",
            "status": "pending",
            "days": 3,
            "is_paid": false
        }"#;

        let leave: LeaveApplication = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, LeaveType::Compassionate);
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.days, 3);
        assert!(!leave.is_paid);
    }

    #[test]
    fn test_leave_type_serializes_as_type_field() {
        let leave = create_leave(date(2025, 3, 10), date(2025, 3, 10), LeaveStatus::Approved);
        let json = serde_json::to_string(&leave).unwrap();
        assert!(json.contains("\"type\":\"sick\""));
        assert!(json.contains("\"status\":\"approved\""));
    }

    #[test]
    fn test_only_approved_is_approved() {
        let range = (date(2025, 3, 10), date(2025, 3, 10));
        assert!(create_leave(range.0, range.1, LeaveStatus::Approved).is_approved());
        assert!(!create_leave(range.0, range.1, LeaveStatus::Pending).is_approved());
        assert!(!create_leave(range.0, range.1, LeaveStatus::Rejected).is_approved());
    }

    #[test]
    fn test_covers_is_inclusive() {
        let leave = create_leave(date(2025, 3, 10), date(2025, 3, 12), LeaveStatus::Approved);
        assert!(leave.covers(date(2025, 3, 10)));
        assert!(leave.covers(date(2025, 3, 12)));
        assert!(!leave.covers(date(2025, 3, 9)));
        assert!(!leave.covers(date(2025, 3, 13)));
    }

    #[test]
    fn test_covered_dates_spans_month_boundary() {
        let leave = create_leave(date(2025, 1, 30), date(2025, 2, 2), LeaveStatus::Approved);
        let dates: Vec<NaiveDate> = leave.covered_dates().collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]
        );
    }

    #[test]
    fn test_covered_dates_empty_for_inverted_range() {
        let leave = create_leave(date(2025, 3, 12), date(2025, 3, 10), LeaveStatus::Approved);
        assert_eq!(leave.covered_dates().count(), 0);
    }

    #[test]
    fn test_validate_accepts_single_day() {
        let leave = create_leave(date(2025, 3, 10), date(2025, 3, 10), LeaveStatus::Approved);
        assert!(leave.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let leave = create_leave(date(2025, 3, 12), date(2025, 3, 10), LeaveStatus::Approved);
        match leave.validate() {
            Err(EngineError::InvalidLeave { leave_id, message }) => {
                assert_eq!(leave_id, "leave_001");
                assert!(message.contains("2025-03-12"));
            }
            other => panic!("Expected InvalidLeave, got {:?}", other),
        }
    }
}
