//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule limits
//! from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EmployeeLimits, LengthRange, StaffLimits, ValidationConfig};

/// Loads and provides access to the validation limits.
///
/// # Directory Structure
///
/// ```text
/// config/rules/
/// ├── employee.yaml   # Employee rule limits
/// └── staff.yaml      # Staff rule limits
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_validator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rules")?;
/// println!("Max employee age: {}", loader.employee().max_age_years);
/// # Ok::<(), staffing_validator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ValidationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// describes limits that cannot be satisfied.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let employee = Self::load_yaml::<EmployeeLimits>(&path.join("employee.yaml"))?;
        let staff = Self::load_yaml::<StaffLimits>(&path.join("staff.yaml"))?;

        let loader = Self::from_config(ValidationConfig { employee, staff })?;
        info!(path = %path.display(), "Loaded validation limits");
        Ok(loader)
    }

    /// Wraps an already-built configuration after checking it.
    pub fn from_config(config: ValidationConfig) -> EngineResult<Self> {
        Self::check(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check(config: &ValidationConfig) -> EngineResult<()> {
        let employee = &config.employee;
        let staff = &config.staff;

        check_length("employee.name_length", employee.name_length)?;
        check_length("staff.name_length", staff.name_length)?;

        let salary = employee.hourly_salary;
        if !salary.min.is_finite() || !salary.max.is_finite() || salary.min > salary.max {
            return Err(invalid(
                "employee.hourly_salary",
                format!("min {} exceeds max {}", salary.min, salary.max),
            ));
        }
        if employee.senior_age_years > employee.max_age_years {
            return Err(invalid(
                "employee.senior_age_years",
                format!(
                    "senior age {} exceeds max age {}",
                    employee.senior_age_years, employee.max_age_years
                ),
            ));
        }
        for (field, amount) in [
            ("employee.senior_minimum_salary", employee.senior_minimum_salary),
            ("employee.junior_minimum_salary", employee.junior_minimum_salary),
        ] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(invalid(field, format!("{} is not a valid amount", amount)));
            }
        }
        if staff.hourly_salary.min > staff.hourly_salary.max {
            return Err(invalid(
                "staff.hourly_salary",
                format!(
                    "min {} exceeds max {}",
                    staff.hourly_salary.min, staff.hourly_salary.max
                ),
            ));
        }

        Ok(())
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Returns the employee rule limits.
    pub fn employee(&self) -> &EmployeeLimits {
        &self.config.employee
    }

    /// Returns the staff rule limits.
    pub fn staff(&self) -> &StaffLimits {
        &self.config.staff
    }
}

fn check_length(field: &str, range: LengthRange) -> EngineResult<()> {
    if range.min > range.max {
        return Err(invalid(
            field,
            format!("min {} exceeds max {}", range.min, range.max),
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}
