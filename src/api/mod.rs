//! HTTP API for the staffing engine.
//!
//! A thin JSON shell over the rota, attendance and payroll operations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculateRequest, GenerateRotaRequest, ReportQuery, ScanRequest, UpdateAmountRequest,
    UpdateShiftRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, SharedRepository};
