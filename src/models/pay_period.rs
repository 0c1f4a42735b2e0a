//! Pay period scale.
//!
//! Every pay component is expressed at one of three scales. Amounts that
//! are naturally monthly (allowances, penalties) are pro-rated down to the
//! daily and weekly scales.

use serde::{Deserialize, Serialize};

/// The scale at which pay is expressed.
///
/// # Example
///
/// ```
/// use staffing_engine::models::PayPeriod;
///
/// let period: PayPeriod = serde_json::from_str("\"weekly\"").unwrap();
/// assert_eq!(period, PayPeriod::Weekly);
/// assert_eq!(period.to_string(), "weekly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    /// Pay for one working day.
    Daily,
    /// Pay for one working week.
    Weekly,
    /// Pay for one month.
    #[default]
    Monthly,
}

impl PayPeriod {
    /// All periods, shortest first.
    pub const ALL: [PayPeriod; 3] = [PayPeriod::Daily, PayPeriod::Weekly, PayPeriod::Monthly];
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayPeriod::Daily => write!(f, "daily"),
            PayPeriod::Weekly => write!(f, "weekly"),
            PayPeriod::Monthly => write!(f, "monthly"),
        }
    }
}
