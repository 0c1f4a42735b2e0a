//! HTTP request handlers for the staffing API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler tags its log lines with a fresh correlation id.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::{ScanOutcome, record_scan, summarize_attendance};
use crate::calculation::calculate_pay_breakdown;
use crate::error::EngineError;
use crate::models::{
    AttendanceRecord, LeaveApplication, PayBreakdown, PayProfile, PayrollReport, PayrollSummary,
    RotaEntry, ShiftStats, StaffMember, StaffPayroll,
};
use crate::payroll::{
    add_to_payroll, generate_report, summarize_payroll, update_attendance,
    update_night_shift_allowance, update_overtime_rate, update_rate,
};
use crate::rota::{compute_shift_stats, generate_rota, update_shift};

use super::request::{
    CalculateRequest, GenerateRotaRequest, ReportQuery, ScanRequest, UpdateAmountRequest,
    UpdateShiftRequest,
};
use super::response::ApiErrorResponse;
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;
type CreatedResult<T> = Result<(StatusCode, Json<T>), ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/staff", post(create_staff).get(list_staff))
        .route("/leave", post(create_leave).get(list_leave))
        .route("/rota", get(get_rota))
        .route("/rota/generate", post(generate_rota_handler))
        .route("/rota/shift", put(update_shift_handler))
        .route("/rota/stats", get(rota_stats))
        .route("/attendance", get(list_attendance))
        .route("/attendance/scan", post(scan_handler))
        .route("/payroll", post(create_payroll).get(list_payroll))
        .route("/payroll/report", get(report_handler))
        .route("/payroll/summary", get(summary_handler))
        .route("/payroll/:id/rate", put(update_rate_handler))
        .route("/payroll/:id/overtime-rate", put(update_overtime_rate_handler))
        .route(
            "/payroll/:id/night-shift-allowance",
            put(update_night_shift_allowance_handler),
        )
        .route("/payroll/:id/attendance", post(apply_attendance_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Unwraps a JSON body, logging and converting a rejection.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected request body"
        );
        rejection.into()
    })
}

/// Logs a failed operation and converts the error.
fn reject(correlation_id: Uuid, operation: &str, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        operation = operation,
        error = %err,
        "Request failed"
    );
    err.into()
}

/// Handler for POST /staff.
async fn create_staff(
    State(state): State<AppState>,
    payload: Result<Json<StaffMember>, JsonRejection>,
) -> CreatedResult<StaffMember> {
    let correlation_id = Uuid::new_v4();
    let member = parse_body(correlation_id, payload)?;

    state
        .repo()
        .write()
        .await
        .add_staff(member.clone())
        .map_err(|err| reject(correlation_id, "create_staff", err))?;

    info!(correlation_id = %correlation_id, staff_id = %member.id, "Staff member added");
    Ok((StatusCode::CREATED, Json(member)))
}

/// Handler for GET /staff.
async fn list_staff(State(state): State<AppState>) -> Json<Vec<StaffMember>> {
    Json(state.repo().read().await.staff().to_vec())
}

/// Handler for POST /leave.
async fn create_leave(
    State(state): State<AppState>,
    payload: Result<Json<LeaveApplication>, JsonRejection>,
) -> CreatedResult<LeaveApplication> {
    let correlation_id = Uuid::new_v4();
    let leave = parse_body(correlation_id, payload)?;

    state
        .repo()
        .write()
        .await
        .add_leave_application(leave.clone())
        .map_err(|err| reject(correlation_id, "create_leave", err))?;

    info!(
        correlation_id = %correlation_id,
        leave_id = %leave.id,
        staff_id = %leave.staff_id,
        status = ?leave.status,
        "Leave application recorded"
    );
    Ok((StatusCode::CREATED, Json(leave)))
}

/// Handler for GET /leave.
async fn list_leave(State(state): State<AppState>) -> Json<Vec<LeaveApplication>> {
    Json(state.repo().read().await.leave_applications().to_vec())
}

/// Handler for POST /rota/generate.
///
/// Regenerates the whole rota from the current staff and leave and
/// replaces the stored one.
async fn generate_rota_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRotaRequest>, JsonRejection>,
) -> ApiResult<Vec<RotaEntry>> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;
    let settings = request
        .settings
        .unwrap_or_else(|| state.config().rota_settings().clone());

    let start_time = Instant::now();
    let mut repo = state.repo().write().await;
    let rota = generate_rota(repo.staff(), repo.leave_applications(), &settings)
        .map_err(|err| reject(correlation_id, "generate_rota", err))?;
    repo.replace_rota(rota.clone());

    info!(
        correlation_id = %correlation_id,
        staff_count = rota.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Rota regenerated"
    );
    Ok(Json(rota))
}

/// Handler for GET /rota.
async fn get_rota(State(state): State<AppState>) -> Json<Vec<RotaEntry>> {
    Json(state.repo().read().await.rota().to_vec())
}

/// Handler for PUT /rota/shift.
async fn update_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateShiftRequest>, JsonRejection>,
) -> ApiResult<RotaEntry> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let mut repo = state.repo().write().await;
    let entry = update_shift(repo.rota_mut(), &request.staff_id, request.day, request.shift)
        .map_err(|err| reject(correlation_id, "update_shift", err))?;

    Ok(Json(entry.clone()))
}

/// Handler for GET /rota/stats.
async fn rota_stats(State(state): State<AppState>) -> Json<ShiftStats> {
    Json(compute_shift_stats(state.repo().read().await.rota()))
}

/// Handler for POST /attendance/scan.
async fn scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> ApiResult<ScanOutcome> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;
    let at = request
        .timestamp
        .unwrap_or_else(|| Local::now().naive_local());

    let mut repo = state.repo().write().await;
    let staff = repo
        .find_staff(&request.staff_id)
        .map_err(|err| reject(correlation_id, "scan", err))?
        .clone();
    let outcome = record_scan(
        repo.attendance_records_mut(),
        &staff,
        at,
        state.config().attendance_policy(),
    )
    .map_err(|err| reject(correlation_id, "scan", err))?;

    info!(
        correlation_id = %correlation_id,
        staff_id = %staff.id,
        record_id = %outcome.record().id,
        "Scan recorded"
    );
    Ok(Json(outcome))
}

/// Handler for GET /attendance.
async fn list_attendance(State(state): State<AppState>) -> Json<Vec<AttendanceRecord>> {
    Json(state.repo().read().await.attendance_records().to_vec())
}

/// Handler for POST /payroll.
///
/// The profile must belong to a known staff member.
async fn create_payroll(
    State(state): State<AppState>,
    payload: Result<Json<PayProfile>, JsonRejection>,
) -> CreatedResult<StaffPayroll> {
    let correlation_id = Uuid::new_v4();
    let profile = parse_body(correlation_id, payload)?;

    let mut repo = state.repo().write().await;
    repo.find_staff(&profile.staff_id)
        .map_err(|err| reject(correlation_id, "create_payroll", err))?;
    let record = add_to_payroll(profile).map_err(|err| reject(correlation_id, "create_payroll", err))?;
    repo.add_payroll(record.clone())
        .map_err(|err| reject(correlation_id, "create_payroll", err))?;

    info!(correlation_id = %correlation_id, staff_id = %record.id, "Payroll record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for GET /payroll.
async fn list_payroll(State(state): State<AppState>) -> Json<Vec<StaffPayroll>> {
    Json(state.repo().read().await.payroll().to_vec())
}

/// Handler for PUT /payroll/:id/rate.
async fn update_rate_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    payload: Result<Json<UpdateAmountRequest>, JsonRejection>,
) -> ApiResult<StaffPayroll> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let mut repo = state.repo().write().await;
    let record = update_rate(repo.payroll_mut(), &staff_id, request.value)
        .map_err(|err| reject(correlation_id, "update_rate", err))?;
    Ok(Json(record.clone()))
}

/// Handler for PUT /payroll/:id/overtime-rate.
async fn update_overtime_rate_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    payload: Result<Json<UpdateAmountRequest>, JsonRejection>,
) -> ApiResult<StaffPayroll> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let mut repo = state.repo().write().await;
    let record = update_overtime_rate(repo.payroll_mut(), &staff_id, request.value)
        .map_err(|err| reject(correlation_id, "update_overtime_rate", err))?;
    Ok(Json(record.clone()))
}

/// Handler for PUT /payroll/:id/night-shift-allowance.
async fn update_night_shift_allowance_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    payload: Result<Json<UpdateAmountRequest>, JsonRejection>,
) -> ApiResult<StaffPayroll> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let mut repo = state.repo().write().await;
    let record = update_night_shift_allowance(repo.payroll_mut(), &staff_id, request.value)
        .map_err(|err| reject(correlation_id, "update_night_shift_allowance", err))?;
    Ok(Json(record.clone()))
}

/// Handler for POST /payroll/:id/attendance.
///
/// Summarizes the stored attendance records of the staff member and
/// applies the summary to their payroll record.
async fn apply_attendance_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> ApiResult<StaffPayroll> {
    let correlation_id = Uuid::new_v4();

    let mut repo = state.repo().write().await;
    let summary = summarize_attendance(repo.attendance_records(), &staff_id);
    let record = update_attendance(repo.payroll_mut(), &staff_id, &summary)
        .map_err(|err| reject(correlation_id, "apply_attendance", err))?;

    info!(
        correlation_id = %correlation_id,
        staff_id = %staff_id,
        days_worked = summary.days_worked,
        "Attendance summary applied"
    );
    Ok(Json(record.clone()))
}

/// Handler for GET /payroll/report.
async fn report_handler(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<PayrollReport> {
    Json(generate_report(state.repo().read().await.payroll(), query.period))
}

/// Handler for GET /payroll/summary.
async fn summary_handler(State(state): State<AppState>) -> Json<PayrollSummary> {
    Json(summarize_payroll(state.repo().read().await.payroll()))
}

/// Handler for POST /calculate.
///
/// Calculates a pay breakdown for the posted record without touching the
/// repository.
async fn calculate_handler(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<PayBreakdown> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let breakdown = calculate_pay_breakdown(&request.staff, request.period);

    info!(
        correlation_id = %correlation_id,
        staff_id = %breakdown.staff_id,
        period = %breakdown.period,
        total = %breakdown.total,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    Ok(Json(breakdown))
}
