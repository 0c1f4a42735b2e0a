//! Configuration loading for the staffing engine.
//!
//! This module loads the default rota settings and the attendance policy
//! from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Work starts at {}", config.attendance_policy().work_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
