//! Attendance policy.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_work_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).unwrap_or(NaiveTime::MIN)
}

fn default_standard_shift_hours() -> Decimal {
    Decimal::from(8)
}

fn default_night_shift_start() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Times and thresholds used to classify scans.
///
/// Loaded from `attendance.yaml`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Check-ins after this time of day are late.
    #[serde(default = "default_work_start")]
    pub work_start: NaiveTime,
    /// Hours in a standard shift; time beyond it is overtime.
    #[serde(default = "default_standard_shift_hours")]
    pub standard_shift_hours: Decimal,
    /// Shifts starting at or after this time of day are night shifts.
    #[serde(default = "default_night_shift_start")]
    pub night_shift_start: NaiveTime,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            work_start: default_work_start(),
            standard_shift_hours: default_standard_shift_hours(),
            night_shift_start: default_night_shift_start(),
        }
    }
}
