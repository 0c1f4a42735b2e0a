//! Payroll collection operations.
//!
//! Enrolment, field updates with cache recomputation, and read-side
//! reporting over a collection of [`StaffPayroll`](crate::models::StaffPayroll)
//! records. Pay figures always come from [`crate::calculation`].

mod enrolment;
mod report;
mod updates;

pub use enrolment::add_to_payroll;
pub use report::{generate_report, summarize_payroll};
pub use updates::{
    recompute, update_attendance, update_night_shift_allowance, update_overtime_rate, update_rate,
};
