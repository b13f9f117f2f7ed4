//! Staff record submitted to `POST /api/staff`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A staff submission awaiting validation.
///
/// Every field is optional on the wire. Absence is meaningful: the staff
/// rule set reports missing `name` and `hourlySalary` as failures, and skips
/// format checks on fields that were not supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    /// Full name of the staff member.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Hourly salary.
    #[serde(default)]
    pub hourly_salary: Option<Decimal>,
}
