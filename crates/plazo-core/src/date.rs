//! # Civil Dates
//!
//! Date handling in the convention used by the courts this tool serves:
//! day-granularity dates entered and displayed as `DD/MM/YYYY`.
//!
//! ## Year Addition Policy
//!
//! Statutory deadlines are "same day-of-year, N years later". When the
//! target day does not exist (a 29 February source landing on a common
//! year), the result is clamped to the last valid day of the target month.
//! [`add_years`] fixes this policy in one place so every deadline in the
//! system agrees on it.

use chrono::{Months, NaiveDate};

use crate::error::DateError;

/// The textual date format accepted at every input boundary.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` date.
///
/// # Errors
///
/// Returns [`DateError::Invalid`] when the text does not parse as a real
/// calendar date. Callers at input boundaries keep their prior state on
/// this error.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| DateError::Invalid {
        input: input.to_string(),
    })
}

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Add `years` whole years, clamping to the last valid day of the target
/// month when the source day does not exist there.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's
/// representable range. Unreachable for the penalty spans this tool
/// handles, but typed rather than panicking.
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, DateError> {
    date.checked_add_months(Months::new(years * 12))
        .ok_or(DateError::OutOfRange)
}

/// Calendar day difference `to - from`. Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
