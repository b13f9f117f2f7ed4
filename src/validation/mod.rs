//! The validation engine.
//!
//! Each record type has a [`RuleSet`]: an ordered list of [`Check`]s, each
//! bound to one field, optionally guarded, and able to read the whole record
//! and the evaluation date. Validation evaluates every check once and returns
//! all failures. It is a pure function of the record and the date passed in.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use staffing_validator::config::StaffLimits;
//! use staffing_validator::models::StaffRecord;
//! use staffing_validator::validation::{staff_rules, validate};
//!
//! let rules = staff_rules(&StaffLimits::default());
//! let today = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
//!
//! let result = validate(&StaffRecord::default(), &rules, today);
//! assert_eq!(result.messages_for("name"), vec!["Name is required."]);
//! assert_eq!(result.messages_for("hourlySalary"), vec!["Hourly salary is required."]);
//! ```

mod check;
mod dates;
pub mod employee_rules;
mod formats;
pub mod staff_rules;

pub use check::{Check, RuleSet, validate};
pub use dates::years_before;
pub use employee_rules::{employee_rules, is_senior};
pub use formats::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS, is_blank, is_valid_email, is_valid_phone};
pub use staff_rules::staff_rules;
