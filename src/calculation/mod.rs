//! Pay calculation logic for the staffing engine.
//!
//! This module contains one function per pay component (base pay, overtime,
//! night-shift allowance and late penalty), the period scaling they share,
//! and the assembly functions that combine them into net pay.

mod base_pay;
mod late_penalty;
mod night_shift;
mod overtime_pay;
mod pay;
mod period_scale;

pub use base_pay::{
    BasePayResult, HOURLY_WEEKLY_DIVISOR, STANDARD_MONTHLY_HOURS, calculate_base_pay,
};
pub use late_penalty::{
    LatePenaltyResult, calculate_late_penalty, late_penalty_per_instance, monthly_late_penalty,
};
pub use night_shift::{NightShiftPayResult, calculate_night_shift_pay};
pub use overtime_pay::{
    OvertimePayResult, calculate_overtime_pay, effective_overtime_rate, overtime_multiplier,
};
pub use pay::{calculate_all_periods, calculate_pay, calculate_pay_breakdown};
pub use period_scale::{
    WEEKS_PER_MONTH, WORKING_DAYS_PER_MONTH, WORKING_DAYS_PER_WEEK, monthly_divisor,
    prorate_monthly,
};
