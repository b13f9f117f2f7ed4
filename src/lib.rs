//! Staffing Validator
//!
//! This crate validates employee and staff submissions against field-level
//! business rules and exposes the rule sets over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
