//! Calendar arithmetic for age-based rules.

use chrono::{Months, NaiveDate};

/// Returns the date `years` calendar years before `today`.
///
/// A 29 February that has no counterpart in the target year becomes
/// 28 February.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staffing_validator::validation::years_before;
///
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(
///     years_before(leap_day, 30),
///     NaiveDate::from_ymd_opt(1994, 2, 28).unwrap()
/// );
/// ```
pub fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}
