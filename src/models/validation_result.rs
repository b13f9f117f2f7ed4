//! Validation outcome types.
//!
//! A [`ValidationResult`] is the ordered list of [`ValidationFailure`]s
//! produced by evaluating one record against one rule set. It is valid
//! if and only if the list is empty.

use serde::{Deserialize, Serialize};

/// One violated check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// The record field the check is bound to (wire name, e.g. `hourlySalary`).
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a new failure for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The ordered failures produced by a single validation call.
///
/// Serializes as a bare JSON array of failures.
///
/// # Examples
///
/// ```
/// use staffing_validator::models::{ValidationFailure, ValidationResult};
///
/// let result = ValidationResult::from(vec![ValidationFailure::new("name", "Invalid Name")]);
/// assert!(!result.is_valid());
/// assert_eq!(result.messages_for("name"), vec!["Invalid Name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Returns true if no check failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failures in rule-set order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Consumes the result, returning the failures.
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the messages reported against `field`, in order.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.failures
            .iter()
            .filter(|failure| failure.field == field)
            .map(|failure| failure.message.as_str())
            .collect()
    }

    pub(crate) fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }
}

impl From<Vec<ValidationFailure>> for ValidationResult {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }
}
