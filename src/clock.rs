//! Source of the current calendar date.
//!
//! Age rules compare a date of birth against "today". The date is read once
//! per request through a [`Clock`] and handed to the engine explicitly, so
//! tests can pin it with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Provides the calendar date used by date-dependent checks.
pub trait Clock: Send + Sync {
    /// Returns the current date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staffing_validator::clock::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock pinned to `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
