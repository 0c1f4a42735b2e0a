//! Configuration types.
//!
//! These are the strongly-typed structures deserialized from the YAML files
//! in the configuration directory.

use crate::attendance::AttendancePolicy;
use crate::models::RotaSettings;

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Default settings for rota generation (`rota.yaml`).
    pub rota: RotaSettings,
    /// Attendance scanning policy (`attendance.yaml`).
    pub attendance: AttendancePolicy,
}

impl EngineConfig {
    /// Creates a configuration from its parts.
    pub fn new(rota: RotaSettings, attendance: AttendancePolicy) -> Self {
        Self { rota, attendance }
    }
}
