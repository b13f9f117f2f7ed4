//! Application state for the staffing validator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::config::ConfigLoader;
use crate::models::{EmployeeRecord, StaffRecord};
use crate::validation::{RuleSet, employee_rules, staff_rules};

/// Shared application state.
///
/// Holds the rule sets built once from the loaded limits, and the clock
/// that supplies "today" for each request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    employee_rules: Arc<RuleSet<EmployeeRecord>>,
    staff_rules: Arc<RuleSet<StaffRecord>>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state that reads the system date.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        let employee_rules = employee_rules(config.employee());
        let staff_rules = staff_rules(config.staff());

        Self {
            config: Arc::new(config),
            employee_rules: Arc::new(employee_rules),
            staff_rules: Arc::new(staff_rules),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the employee rule set.
    pub fn employee_rules(&self) -> &RuleSet<EmployeeRecord> {
        &self.employee_rules
    }

    /// Returns the staff rule set.
    pub fn staff_rules(&self) -> &RuleSet<StaffRecord> {
        &self.staff_rules
    }

    /// Returns the current date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
