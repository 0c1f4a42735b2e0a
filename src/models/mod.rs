//! Core data models for the staffing engine.
//!
//! This module contains all the domain models shared by the rota, payroll
//! and attendance operations.

mod attendance;
mod calculation_result;
mod leave;
mod pay_period;
mod payroll;
mod report;
mod rota;
mod staff;

pub use attendance::{AttendanceCounts, AttendanceRecord, AttendanceStatus};
pub use calculation_result::{AuditStep, PayBreakdown};
pub use leave::{LeaveApplication, LeaveStatus, LeaveType};
pub use pay_period::PayPeriod;
pub use payroll::{CalculatedPay, PayProfile, PayType, PayrollStatus, StaffPayroll};
pub use report::{PayrollReport, PayrollSummary, StaffPayReport};
pub use rota::{DayOfWeek, RotaEntry, RotaSettings, ShiftPercentages, ShiftStats, ShiftType};
pub use staff::StaffMember;
