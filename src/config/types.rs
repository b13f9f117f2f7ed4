//! Configuration types for the validation rule limits.
//!
//! This module contains the strongly-typed limit structures that are
//! deserialized from YAML configuration files. Every limit has a built-in
//! default, so a missing key falls back to the standard rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive character-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    /// Minimum number of characters.
    pub min: usize,
    /// Maximum number of characters.
    pub max: usize,
}

impl LengthRange {
    /// Returns true if `len` lies within the range.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// An inclusive floating-point range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AmountRange {
    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// An inclusive decimal range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalRange {
    /// Lower bound.
    pub min: Decimal,
    /// Upper bound.
    pub max: Decimal,
}

impl DecimalRange {
    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Limits applied by the employee rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeLimits {
    /// Allowed name length.
    pub name_length: LengthRange,
    /// Oldest accepted age, in years.
    pub max_age_years: u32,
    /// Age at which the senior salary minimum applies.
    pub senior_age_years: u32,
    /// Allowed hourly salary range.
    pub hourly_salary: AmountRange,
    /// Minimum hourly salary for senior employees.
    pub senior_minimum_salary: f64,
    /// Minimum hourly salary for everyone else.
    pub junior_minimum_salary: f64,
}

impl Default for EmployeeLimits {
    fn default() -> Self {
        Self {
            name_length: LengthRange { min: 10, max: 250 },
            max_age_years: 65,
            senior_age_years: 30,
            hourly_salary: AmountRange {
                min: 50.0,
                max: 400.0,
            },
            senior_minimum_salary: 200.0,
            junior_minimum_salary: 50.0,
        }
    }
}

/// Limits applied by the staff rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffLimits {
    /// Allowed name length.
    pub name_length: LengthRange,
    /// Allowed hourly salary range.
    pub hourly_salary: DecimalRange,
}

impl Default for StaffLimits {
    fn default() -> Self {
        Self {
            name_length: LengthRange { min: 10, max: 250 },
            hourly_salary: DecimalRange {
                min: Decimal::from(30),
                max: Decimal::from(400),
            },
        }
    }
}

/// The complete set of limits for both rule sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationConfig {
    /// Employee rule limits.
    pub employee: EmployeeLimits,
    /// Staff rule limits.
    pub staff: StaffLimits,
}
