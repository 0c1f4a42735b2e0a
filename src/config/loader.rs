//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::attendance::AttendancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::RotaSettings;

use super::types::EngineConfig;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── rota.yaml        # Default rota settings
/// └── attendance.yaml  # Attendance scanning policy
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Staff per shift: {}", loader.rota_settings().staff_per_shift);
/// # Ok::<(), staffing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if a file is missing,
    /// [`EngineError::ConfigParseError`] if a file is not valid YAML for its
    /// type, and [`EngineError::InvalidSettings`] if the rota settings are
    /// out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rota = Self::load_yaml::<RotaSettings>(&path.join("rota.yaml"))?;
        rota.validate()?;

        let attendance = Self::load_yaml::<AttendancePolicy>(&path.join("attendance.yaml"))?;

        info!(
            path = %path.display(),
            staff_per_shift = rota.staff_per_shift,
            off_days_per_staff = rota.off_days_per_staff,
            work_start = %attendance.work_start,
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(rota, attendance),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default rota settings.
    pub fn rota_settings(&self) -> &RotaSettings {
        &self.config.rota
    }

    /// Returns the attendance policy.
    pub fn attendance_policy(&self) -> &AttendancePolicy {
        &self.config.attendance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("staffing-engine-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rota_settings().staff_per_shift, 3);
        assert_eq!(loader.rota_settings().off_days_per_staff, 2);
        assert_eq!(
            loader.rota_settings().preferred_off_days,
            vec![DayOfWeek::Saturday, DayOfWeek::Sunday]
        );
    }

    #[test]
    fn test_attendance_policy_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let policy = loader.attendance_policy();

        assert_eq!(policy.work_start, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(policy.standard_shift_hours, Decimal::from(8));
        assert_eq!(policy.night_shift_start, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rota.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("rota.yaml"), "staff_per_shift: [not, a, number]\n").unwrap();
        fs::write(dir.join("attendance.yaml"), "{}\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rota.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_settings_rejected() {
        let dir = scratch_dir("out-of-range");
        fs::write(dir.join("rota.yaml"), "off_days_per_staff: 9\n").unwrap();
        fs::write(dir.join("attendance.yaml"), "{}\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_empty_files_use_defaults() {
        let dir = scratch_dir("defaults");
        fs::write(dir.join("rota.yaml"), "{}\n").unwrap();
        fs::write(dir.join("attendance.yaml"), "{}\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config(), &EngineConfig::default());
    }
}
