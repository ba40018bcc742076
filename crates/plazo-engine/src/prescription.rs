//! # Prescription Window Pipeline
//!
//! Derives the sequence of limitation windows for a case. Each window is a
//! continuous clock segment bounded by two procedural milestones; the
//! statutory deadline runs from the window's own start (interruption
//! semantics — the clock restarts, it does not pause).
//!
//! The pipeline is a fixed, ordered table of window specifications. Each
//! entry declares where its clock starts and which well-known event
//! terminates it; a window is derived exactly when its start is available,
//! which is the same condition as "the previous window's terminating event
//! is dated". The gating is therefore structural, not a convention spread
//! across ad hoc branches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plazo_case::CaseFile;
use plazo_core::{add_years, well_known};

use crate::error::PrescriptionError;

// ── The Pipeline Table ─────────────────────────────────────────────────

/// Where a window's limitation clock starts.
#[derive(Debug, Clone, Copy)]
enum ClockStart {
    /// The configured crime date.
    CrimeDate,
    /// The date of a well-known event (the previous window's terminator).
    EventDate(&'static str),
}

/// One entry of the window pipeline.
#[derive(Debug, Clone, Copy)]
struct WindowSpec {
    label: &'static str,
    start: ClockStart,
    terminator: &'static str,
}

/// The three legally significant clock segments, in procedural order.
const PIPELINE: [WindowSpec; 3] = [
    WindowSpec {
        label: "Del hecho al primer llamado a indagatoria",
        start: ClockStart::CrimeDate,
        terminator: well_known::INDICTMENT,
    },
    WindowSpec {
        label: "Del primer llamado a indagatoria al requerimiento de elevación",
        start: ClockStart::EventDate(well_known::INDICTMENT),
        terminator: well_known::INSTRUCTION_END,
    },
    WindowSpec {
        label: "Del requerimiento de elevación a la sentencia",
        start: ClockStart::EventDate(well_known::INSTRUCTION_END),
        terminator: well_known::SENTENCE,
    },
];

// ── Derived Output ─────────────────────────────────────────────────────

/// One limitation window with its deadline and verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitationWindow {
    /// Spanish description of the procedural segment.
    pub label: String,
    /// The date this window's clock began running.
    pub start_date: NaiveDate,
    /// The date the window closed: the terminating event's date, or
    /// "today" while that event is undated.
    pub end_date: NaiveDate,
    /// `start_date` plus the penalty span, whole years.
    pub deadline: NaiveDate,
    /// Whether the window closed after its deadline.
    pub expired: bool,
}

/// The full prescription evaluation for one case at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionReport {
    /// Derived windows, ascending by start date.
    pub windows: Vec<LimitationWindow>,
    /// The "now" this evaluation used for open windows.
    pub today: NaiveDate,
}

impl PrescriptionReport {
    /// Aggregate verdict: the case is time-barred iff any window expired.
    /// Timely action in a later window never cures an earlier expiry.
    pub fn prescribed(&self) -> bool {
        self.windows.iter().any(|w| w.expired)
    }

    /// The expired windows, in pipeline order.
    pub fn expired_windows(&self) -> impl Iterator<Item = &LimitationWindow> {
        self.windows.iter().filter(|w| w.expired)
    }
}

/// Evaluate the window pipeline for `case` as of `today`.
///
/// `today` is sampled once by the caller so every open window in one
/// evaluation agrees on "now".
///
/// # Errors
///
/// [`PrescriptionError::MissingCrimeDate`] when the case has no origin
/// point (zero windows, no verdict).
pub fn evaluate(case: &CaseFile, today: NaiveDate) -> Result<PrescriptionReport, PrescriptionError> {
    let crime_date = case
        .config
        .crime_date
        .ok_or(PrescriptionError::MissingCrimeDate)?;
    let penalty_years = case.config.max_penalty_years();

    let mut windows = Vec::with_capacity(PIPELINE.len());
    for spec in PIPELINE {
        let start_date = match spec.start {
            ClockStart::CrimeDate => Some(crime_date),
            ClockStart::EventDate(id) => case.events().get(id).and_then(|e| e.date),
        };
        // Undated start means the previous terminator has not occurred;
        // this window does not exist yet.
        let Some(start_date) = start_date else {
            continue;
        };

        let end_date = case
            .events()
            .get(spec.terminator)
            .and_then(|e| e.date)
            .unwrap_or(today);
        let deadline = add_years(start_date, penalty_years)?;
        windows.push(LimitationWindow {
            label: spec.label.to_string(),
            start_date,
            end_date,
            deadline,
            expired: end_date > deadline,
        });
    }

    let report = PrescriptionReport { windows, today };
    tracing::debug!(
        windows = report.windows.len(),
        prescribed = report.prescribed(),
        "evaluated limitation windows"
    );
    Ok(report)
}
