//! Attendance scanning and summaries.
//!
//! Scans open and close [`AttendanceRecord`](crate::models::AttendanceRecord)s;
//! summaries turn a staff member's records into the figures payroll needs.

mod policy;
mod scan;
mod summary;

pub use policy::AttendancePolicy;
pub use scan::{ScanOutcome, record_scan};
pub use summary::{AttendanceSummary, summarize_attendance};
