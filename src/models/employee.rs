//! Employee record submitted to `POST /api/employee`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee submission awaiting validation.
///
/// `name` and `date_of_birth` must be present on the wire; the contact
/// fields are optional and an absent `hourlySalary` reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Full name of the employee.
    pub name: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Hourly salary.
    #[serde(default)]
    pub hourly_salary: f64,
}

impl EmployeeRecord {
    /// Returns the email address if one was supplied and it is not empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// Returns the phone number if one was supplied and it is not empty.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|phone| !phone.is_empty())
    }
}
