//! Configuration loading and management for the staffing validator.
//!
//! Rule limits (name lengths, salary ranges, age thresholds) are read from
//! YAML files. When no directory is configured the built-in limits apply.
//!
//! # Example
//!
//! ```no_run
//! use staffing_validator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rules").unwrap();
//! println!("Staff salary floor: {}", config.staff().hourly_salary.min);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AmountRange, DecimalRange, EmployeeLimits, LengthRange, StaffLimits, ValidationConfig,
};
