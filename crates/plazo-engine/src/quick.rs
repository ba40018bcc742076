//! # Single-Shot Calculator
//!
//! The simpler calculator variant: one crime date, one crime type from the
//! static registry, one deadline. No windows, no interruptions — a first
//! orientation before the full timeline is loaded with dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plazo_case::find_crime_type;
use plazo_core::{add_years, days_between};

use crate::error::QuickError;

/// Remaining-days threshold below which the assessment flags a warning.
pub const WARNING_THRESHOLD_DAYS: i64 = 180;

/// The single-shot prescription assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAssessment {
    /// The statutory deadline for the chosen crime type.
    pub prescription_date: NaiveDate,
    /// Days from "today" to the deadline. Negative once past it.
    pub days_remaining: i64,
    /// Whether the deadline has passed.
    pub expired: bool,
    /// Whether the deadline is near ([`WARNING_THRESHOLD_DAYS`] or fewer
    /// days away, including already past).
    pub warning: bool,
}

/// Assess a crime date against a registry crime type, as of `today`.
///
/// # Errors
///
/// [`QuickError::UnknownCrimeType`] when the identifier is not in the
/// registry.
pub fn assess(
    crime_date: NaiveDate,
    crime_type_id: &str,
    today: NaiveDate,
) -> Result<QuickAssessment, QuickError> {
    let crime_type = find_crime_type(crime_type_id)
        .ok_or_else(|| QuickError::UnknownCrimeType(crime_type_id.to_string()))?;
    let prescription_date = add_years(crime_date, crime_type.prescription_years)?;
    let days_remaining = days_between(today, prescription_date);
    Ok(QuickAssessment {
        prescription_date,
        days_remaining,
        expired: days_remaining < 0,
        warning: days_remaining <= WARNING_THRESHOLD_DAYS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn assessment_for_a_distant_deadline() {
        let a = assess(d(2024, 1, 1), "homicide", d(2025, 1, 1)).unwrap();
        assert_eq!(a.prescription_date, d(2039, 1, 1));
        assert!(!a.expired);
        assert!(!a.warning);
        assert_eq!(a.days_remaining, days_between(d(2025, 1, 1), d(2039, 1, 1)));
    }

    #[test]
    fn assessment_past_the_deadline() {
        let a = assess(d(2010, 1, 1), "threats", d(2025, 1, 1)).unwrap();
        assert_eq!(a.prescription_date, d(2013, 1, 1));
        assert!(a.expired);
        assert!(a.warning);
        assert!(a.days_remaining < 0);
    }

    #[test]
    fn warning_at_the_threshold() {
        // Deadline exactly 180 days out.
        let a = assess(d(2020, 1, 1), "threats", d(2022, 7, 5)).unwrap();
        assert_eq!(a.days_remaining, 180);
        assert!(a.warning);
        assert!(!a.expired);
    }

    #[test]
    fn no_warning_just_past_the_threshold() {
        let a = assess(d(2020, 1, 1), "threats", d(2022, 7, 4)).unwrap();
        assert_eq!(a.days_remaining, 181);
        assert!(!a.warning);
    }

    #[test]
    fn deadline_day_itself_is_not_expired() {
        let a = assess(d(2020, 1, 1), "threats", d(2023, 1, 1)).unwrap();
        assert_eq!(a.days_remaining, 0);
        assert!(!a.expired);
        assert!(a.warning);
    }

    #[test]
    fn unknown_crime_type_is_an_error() {
        assert_eq!(
            assess(d(2020, 1, 1), "piracy", d(2021, 1, 1)).unwrap_err(),
            QuickError::UnknownCrimeType("piracy".to_string())
        );
    }
}
