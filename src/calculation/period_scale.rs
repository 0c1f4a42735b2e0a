//! Period scaling.
//!
//! Allowances and penalties are monthly figures. They are pro-rated to a
//! working day by dividing by the working days in a month, and to a week by
//! dividing by the weeks in a month.

use rust_decimal::Decimal;

use crate::models::PayPeriod;

/// Working days assumed in a month.
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// Working days assumed in a week.
pub const WORKING_DAYS_PER_WEEK: u32 = 5;

/// Weeks assumed in a month.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Returns the divisor that turns a monthly figure into one for `period`.
pub fn monthly_divisor(period: PayPeriod) -> Decimal {
    match period {
        PayPeriod::Daily => Decimal::from(WORKING_DAYS_PER_MONTH),
        PayPeriod::Weekly => Decimal::from(WEEKS_PER_MONTH),
        PayPeriod::Monthly => Decimal::ONE,
    }
}

/// Pro-rates a monthly amount to `period`.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::prorate_monthly;
/// use staffing_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// assert_eq!(prorate_monthly(Decimal::from(80), PayPeriod::Weekly), Decimal::from(20));
/// assert_eq!(prorate_monthly(Decimal::from(44), PayPeriod::Daily), Decimal::from(2));
/// assert_eq!(prorate_monthly(Decimal::from(80), PayPeriod::Monthly), Decimal::from(80));
/// ```
pub fn prorate_monthly(amount: Decimal, period: PayPeriod) -> Decimal {
    match period {
        PayPeriod::Monthly => amount,
        _ => amount / monthly_divisor(period),
    }
}
