//! Error types for the staffing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the rota, payroll and attendance operations reject.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the staffing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::StaffNotFound {
///     staff_id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Staff member not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No staff member (or payroll/rota record) exists for the given id.
    #[error("Staff member not found: {staff_id}")]
    StaffNotFound {
        /// The id that was looked up.
        staff_id: String,
    },

    /// A record with the same staff id already exists.
    #[error("Staff member already exists: {staff_id}")]
    DuplicateStaff {
        /// The duplicated id.
        staff_id: String,
    },

    /// A leave application was invalid or contained inconsistent data.
    #[error("Invalid leave application '{leave_id}': {message}")]
    InvalidLeave {
        /// The id of the invalid leave application.
        leave_id: String,
        /// A description of what made the application invalid.
        message: String,
    },

    /// Rota settings were out of range.
    #[error("Invalid rota setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// A pay profile or pay field update was invalid.
    #[error("Invalid pay profile field '{field}': {message}")]
    InvalidPayProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The staff member already completed attendance for the day.
    #[error("Staff member '{staff_id}' has already checked out on {date}")]
    AlreadyCheckedOut {
        /// The staff member who scanned.
        staff_id: String,
        /// The calendar day of the closed record.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
