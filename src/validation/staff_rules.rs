//! Rule set for staff submissions.
//!
//! Every staff field is optional on the wire. `name` and `hourlySalary` are
//! required by the rules themselves, so their absence is reported as a
//! failure; range and format checks only run on values that were supplied.
//! A present but empty email is still format-checked and fails.

use crate::config::StaffLimits;
use crate::models::StaffRecord;

use super::check::{Check, RuleSet};
use super::formats::{is_blank, is_valid_email, is_valid_phone};

/// Reported when the name is absent or blank.
pub const NAME_REQUIRED: &str = "Name is required.";
/// Reported when a supplied email address is malformed.
pub const INVALID_EMAIL: &str = "Email address is not valid.";
/// Reported when a supplied phone number is malformed.
pub const INVALID_PHONE: &str = "Phone is not valid.";
/// Reported when the hourly salary is absent.
pub const SALARY_REQUIRED: &str = "Hourly salary is required.";

/// Builds the staff rule set from the configured limits.
pub fn staff_rules(limits: &StaffLimits) -> RuleSet<StaffRecord> {
    let name_length = limits.name_length;
    let salary_range = limits.hourly_salary;

    let name_length_message = format!(
        "Name length must be between {} and {} characters.",
        name_length.min, name_length.max
    );
    let salary_range_message = format!(
        "Hourly salary must be between {} and {}.",
        salary_range.min.normalize(),
        salary_range.max.normalize()
    );

    RuleSet::new("staff")
        .check(Check::new("name", NAME_REQUIRED, |s: &StaffRecord, _| {
            s.name.as_deref().is_some_and(|name| !is_blank(name))
        }))
        .check(
            Check::new("name", name_length_message, move |s: &StaffRecord, _| {
                s.name
                    .as_deref()
                    .is_none_or(|name| name_length.contains(name.chars().count()))
            })
            .when(|s| s.name.is_some()),
        )
        .check(
            Check::new("email", INVALID_EMAIL, |s: &StaffRecord, _| {
                s.email.as_deref().is_none_or(is_valid_email)
            })
            .when(|s| s.email.is_some()),
        )
        .check(
            Check::new("phone", INVALID_PHONE, |s: &StaffRecord, _| {
                s.phone.as_deref().is_none_or(is_valid_phone)
            })
            .when(|s| s.phone.as_deref().is_some_and(|phone| !phone.is_empty())),
        )
        .check(Check::new(
            "hourlySalary",
            SALARY_REQUIRED,
            |s: &StaffRecord, _| s.hourly_salary.is_some(),
        ))
        .check(
            Check::new(
                "hourlySalary",
                salary_range_message,
                move |s: &StaffRecord, _| {
                    s.hourly_salary
                        .is_none_or(|salary| salary_range.contains(salary))
                },
            )
            .when(|s| s.hourly_salary.is_some()),
        )
}
