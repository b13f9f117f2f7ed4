//! Checks, rule sets and the aggregation loop.
//!
//! A [`Check`] binds a predicate to a field and a message. Predicates see the
//! whole record and the evaluation date, which lets cross-field rules read
//! sibling fields. An optional guard decides whether the check runs at all.
//! A [`RuleSet`] is an ordered list of checks evaluated without
//! short-circuiting.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{ValidationFailure, ValidationResult};

type Predicate<R> = Box<dyn Fn(&R, NaiveDate) -> bool + Send + Sync>;
type Guard<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A single validation rule bound to one field.
pub struct Check<R> {
    field: &'static str,
    message: String,
    predicate: Predicate<R>,
    guard: Option<Guard<R>>,
}

impl<R> Check<R> {
    /// Creates a check that fails with `message` when `predicate` returns false.
    pub fn new<F>(field: &'static str, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&R, NaiveDate) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            message: message.into(),
            predicate: Box::new(predicate),
            guard: None,
        }
    }

    /// Only evaluates the check when `guard` holds for the record.
    pub fn when<G>(mut self, guard: G) -> Self
    where
        G: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    /// The field this check reports against.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The message reported on failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates the check, returning a failure if it is active and violated.
    pub fn evaluate(&self, record: &R, today: NaiveDate) -> Option<ValidationFailure> {
        if let Some(guard) = &self.guard {
            if !guard(record) {
                return None;
            }
        }

        if (self.predicate)(record, today) {
            None
        } else {
            Some(ValidationFailure::new(self.field, self.message.as_str()))
        }
    }
}

impl<R> std::fmt::Debug for Check<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("field", &self.field)
            .field("message", &self.message)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

/// The ordered collection of checks defining validity for one record type.
#[derive(Debug)]
pub struct RuleSet<R> {
    name: &'static str,
    checks: Vec<Check<R>>,
}

impl<R> RuleSet<R> {
    /// Creates an empty rule set.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Appends a check.
    pub fn check(mut self, check: Check<R>) -> Self {
        self.checks.push(check);
        self
    }

    /// The rule set's name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The checks in evaluation order.
    pub fn checks(&self) -> &[Check<R>] {
        &self.checks
    }

    /// Evaluates every check once, in order, collecting every failure.
    pub fn validate(&self, record: &R, today: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::default();

        for check in &self.checks {
            if let Some(failure) = check.evaluate(record, today) {
                result.push(failure);
            }
        }

        debug!(
            rule_set = self.name,
            checks = self.checks.len(),
            failures = result.len(),
            %today,
            "Evaluated rule set"
        );

        result
    }
}

/// Validates `record` against `rule_set` as of `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staffing_validator::validation::{validate, Check, RuleSet};
///
/// let rules = RuleSet::new("numbers")
///     .check(Check::new("value", "must be positive", |n: &i32, _| *n > 0));
/// let today = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
///
/// assert!(validate(&5, &rules, today).is_valid());
/// assert_eq!(validate(&-1, &rules, today).len(), 1);
/// ```
pub fn validate<R>(record: &R, rule_set: &RuleSet<R>, today: NaiveDate) -> ValidationResult {
    rule_set.validate(record, today)
}
