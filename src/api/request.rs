//! Request types for the staffing API.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayOfWeek, PayPeriod, RotaSettings, ShiftType, StaffPayroll};

/// Body for `POST /rota/generate`.
///
/// Settings left out fall back to the configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRotaRequest {
    /// Overrides for this generation only.
    #[serde(default)]
    pub settings: Option<RotaSettings>,
}

/// Body for `PUT /rota/shift`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateShiftRequest {
    /// The staff member whose cell changes.
    pub staff_id: String,
    /// The weekday of the cell.
    pub day: DayOfWeek,
    /// The new shift.
    pub shift: ShiftType,
}

/// Body for `POST /attendance/scan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// The staff member scanning.
    pub staff_id: String,
    /// When the scan happened; the server's local time when omitted.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Body for the `PUT /payroll/:id/...` field updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAmountRequest {
    /// The new value of the field.
    pub value: Decimal,
}

/// Query string for `GET /payroll/report`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    /// The period to report on; monthly when omitted.
    #[serde(default)]
    pub period: PayPeriod,
}

/// Body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The payroll record to calculate.
    pub staff: StaffPayroll,
    /// The period to calculate; monthly when omitted.
    #[serde(default)]
    pub period: PayPeriod,
}
