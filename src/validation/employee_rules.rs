//! Rule set for employee submissions.
//!
//! Checks, in evaluation order:
//!
//! | Field          | Message                                              | Active when   |
//! |----------------|------------------------------------------------------|---------------|
//! | `name`         | [`INVALID_NAME`]                                     | always        |
//! | `dateOfBirth`  | [`INVALID_BIRTHDATE`]                                | always        |
//! | `email`        | [`INVALID_EMAIL`]                                    | email present |
//! | `phone`        | [`INVALID_PHONE`]                                    | phone present |
//! | `hourlySalary` | [`SALARY_OUT_OF_RANGE`]                              | always        |
//! | `hourlySalary` | [`MINIMUM_SALARY_NOT_MET`]                           | always        |
//!
//! The birthdate rule only rejects employees older than the maximum age.
//! Future birthdates pass.

use chrono::NaiveDate;

use crate::config::EmployeeLimits;
use crate::models::EmployeeRecord;

use super::check::{Check, RuleSet};
use super::dates::years_before;
use super::formats::{is_blank, is_valid_email, is_valid_phone};

/// Reported when the name is empty or its length is out of range.
pub const INVALID_NAME: &str = "Invalid Name";
/// Reported when the employee is older than the maximum age.
pub const INVALID_BIRTHDATE: &str = "Birthdate is not valid.";
/// Reported when a supplied email address is malformed.
pub const INVALID_EMAIL: &str = "Email address is not valid.";
/// Reported when a supplied phone number is malformed.
pub const INVALID_PHONE: &str = "Phone is not valid.";
/// Reported when the hourly salary is outside the allowed range.
pub const SALARY_OUT_OF_RANGE: &str = "Hourly salary does not fall within allowed range.";
/// Reported when the hourly salary is below the age-based minimum.
pub const MINIMUM_SALARY_NOT_MET: &str = "Minimum hourly salary is not valid.";

/// Returns true if someone born on `date_of_birth` has reached
/// `senior_age_years` as of `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staffing_validator::validation::is_senior;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert!(is_senior(NaiveDate::from_ymd_opt(1996, 1, 13).unwrap(), today, 30));
/// assert!(!is_senior(NaiveDate::from_ymd_opt(1996, 1, 14).unwrap(), today, 30));
/// ```
pub fn is_senior(date_of_birth: NaiveDate, today: NaiveDate, senior_age_years: u32) -> bool {
    date_of_birth <= years_before(today, senior_age_years)
}

/// Builds the employee rule set from the configured limits.
pub fn employee_rules(limits: &EmployeeLimits) -> RuleSet<EmployeeRecord> {
    let name_length = limits.name_length;
    let max_age = limits.max_age_years;
    let salary_range = limits.hourly_salary;
    let senior_age = limits.senior_age_years;
    let senior_minimum = limits.senior_minimum_salary;
    let junior_minimum = limits.junior_minimum_salary;

    RuleSet::new("employee")
        .check(Check::new(
            "name",
            INVALID_NAME,
            move |e: &EmployeeRecord, _| {
                !is_blank(&e.name) && name_length.contains(e.name.chars().count())
            },
        ))
        .check(Check::new(
            "dateOfBirth",
            INVALID_BIRTHDATE,
            move |e: &EmployeeRecord, today| e.date_of_birth >= years_before(today, max_age),
        ))
        .check(
            Check::new("email", INVALID_EMAIL, |e: &EmployeeRecord, _| {
                e.email().is_none_or(is_valid_email)
            })
            .when(|e| e.email().is_some()),
        )
        .check(
            Check::new("phone", INVALID_PHONE, |e: &EmployeeRecord, _| {
                e.phone().is_none_or(is_valid_phone)
            })
            .when(|e| e.phone().is_some()),
        )
        .check(Check::new(
            "hourlySalary",
            SALARY_OUT_OF_RANGE,
            move |e: &EmployeeRecord, _| salary_range.contains(e.hourly_salary),
        ))
        .check(Check::new(
            "hourlySalary",
            MINIMUM_SALARY_NOT_MET,
            move |e: &EmployeeRecord, today| {
                let minimum = if is_senior(e.date_of_birth, today, senior_age) {
                    senior_minimum
                } else {
                    junior_minimum
                };
                e.hourly_salary >= minimum
            },
        ))
}
