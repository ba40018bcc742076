//! # Duration Calculators
//!
//! Elapsed time between procedural events, in the court clerk's fixed
//! approximation: 30-day months, 365-day years. The approximation is not
//! calendar-accurate and is kept deliberately — practitioners expect the
//! same figures the desk tool has always produced.
//!
//! Month counts floor toward minus infinity and remainder days keep the
//! dividend's sign, so a negative span (misordered arguments) surfaces as
//! negative figures rather than being clamped away.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plazo_case::EventStore;
use plazo_core::{days_between, ProceduralEvent, ProcessStage};

/// Days per month in the fixed approximation.
const DAYS_PER_MONTH: i64 = 30;

/// Days per year in the fixed approximation.
const DAYS_PER_YEAR: i64 = 365;

// ── Breakdown Types ────────────────────────────────────────────────────

/// A day span decomposed as months and remainder days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// The underlying calendar day difference. Negative when misordered.
    pub total_days: i64,
    /// Whole 30-day months, floored toward minus infinity.
    pub months: i64,
    /// Remainder days, sign of `total_days`.
    pub days: i64,
}

impl DurationBreakdown {
    /// Decompose a day count.
    pub fn from_total_days(total_days: i64) -> Self {
        Self {
            total_days,
            months: total_days.div_euclid(DAYS_PER_MONTH),
            days: total_days % DAYS_PER_MONTH,
        }
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} meses y {} días", self.months, self.days)
    }
}

/// A day span decomposed as years, months, and remainder days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDuration {
    /// The underlying calendar day difference.
    pub total_days: i64,
    /// Whole 365-day years.
    pub years: i64,
    /// Whole 30-day months of the remainder.
    pub months: i64,
    /// Remainder days.
    pub days: i64,
}

impl TotalDuration {
    /// Decompose a day count.
    pub fn from_total_days(total_days: i64) -> Self {
        let remainder = total_days % DAYS_PER_YEAR;
        Self {
            total_days,
            years: total_days.div_euclid(DAYS_PER_YEAR),
            months: remainder.div_euclid(DAYS_PER_MONTH),
            days: remainder % DAYS_PER_MONTH,
        }
    }
}

impl std::fmt::Display for TotalDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} años, {} meses y {} días",
            self.years, self.months, self.days
        )
    }
}

// ── Calculators ────────────────────────────────────────────────────────

/// Elapsed time from `a` to `b`. `None` unless both events are dated.
///
/// Negative figures signal misordered arguments; they are never clamped.
pub fn duration_between(a: &ProceduralEvent, b: &ProceduralEvent) -> Option<DurationBreakdown> {
    let from = a.date?;
    let to = b.date?;
    Some(DurationBreakdown::from_total_days(days_between(from, to)))
}

/// Elapsed time across one stage: first to last dated event, ascending.
/// `None` with fewer than two dated events in the stage.
pub fn stage_duration(events: &EventStore, stage: ProcessStage) -> Option<DurationBreakdown> {
    let mut dates: Vec<NaiveDate> = events.in_stage(stage).filter_map(|e| e.date).collect();
    dates.sort();
    match (dates.first(), dates.last()) {
        (Some(&first), Some(&last)) if dates.len() >= 2 => Some(
            DurationBreakdown::from_total_days(days_between(first, last)),
        ),
        _ => None,
    }
}

/// Elapsed time across the whole process: first to last dated event over
/// all stages. `None` with fewer than two dated events overall.
pub fn total_duration(events: &EventStore) -> Option<TotalDuration> {
    let dated = events.dated_sorted();
    if dated.len() < 2 {
        return None;
    }
    let first = dated.first().and_then(|e| e.date)?;
    let last = dated.last().and_then(|e| e.date)?;
    Some(TotalDuration::from_total_days(days_between(first, last)))
}
