//! Core data models for the staffing validator.
//!
//! This module contains the submitted record types and the validation
//! outcome types returned by the engine.

mod employee;
mod staff;
mod validation_result;

pub use employee::EmployeeRecord;
pub use staff::StaffRecord;
pub use validation_result::{ValidationFailure, ValidationResult};
