//! # Recompute
//!
//! The single entry point callers invoke after every case mutation. The
//! derivation is full, not incremental — there is no cached partial state
//! to invalidate — and pure: "today" comes in as a parameter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plazo_case::CaseFile;
use plazo_core::{DateError, ProcessStage};

use crate::duration::{stage_duration, total_duration, DurationBreakdown, TotalDuration};
use crate::error::PrescriptionError;
use crate::prescription::{evaluate, PrescriptionReport};

/// Per-stage elapsed times. `None` = fewer than two dated events there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDurations {
    /// Instruction stage span.
    pub instruction: Option<DurationBreakdown>,
    /// Trial stage span.
    pub trial: Option<DurationBreakdown>,
    /// Recurse stage span.
    pub recurse: Option<DurationBreakdown>,
}

impl StageDurations {
    /// The span for one stage.
    pub fn for_stage(&self, stage: ProcessStage) -> Option<DurationBreakdown> {
        match stage {
            ProcessStage::Instruction => self.instruction,
            ProcessStage::Trial => self.trial,
            ProcessStage::Recurse => self.recurse,
        }
    }
}

/// Everything the tool derives from one case state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedResults {
    /// The prescription evaluation; `None` while no crime date is set.
    pub prescription: Option<PrescriptionReport>,
    /// Per-stage elapsed times.
    pub stage_durations: StageDurations,
    /// Whole-process elapsed time; `None` with fewer than two dated
    /// events.
    pub total_duration: Option<TotalDuration>,
}

/// Derive all display results from `case` as of `today`.
///
/// # Errors
///
/// Only deadline arithmetic can fail ([`DateError::OutOfRange`]); a
/// missing crime date is the `prescription: None` outcome, not an error.
pub fn recompute(case: &CaseFile, today: NaiveDate) -> Result<DerivedResults, DateError> {
    let prescription = match evaluate(case, today) {
        Ok(report) => Some(report),
        Err(PrescriptionError::MissingCrimeDate) => None,
        Err(PrescriptionError::Date(e)) => return Err(e),
    };
    let events = case.events();
    Ok(DerivedResults {
        prescription,
        stage_durations: StageDurations {
            instruction: stage_duration(events, ProcessStage::Instruction),
            trial: stage_duration(events, ProcessStage::Trial),
            recurse: stage_duration(events, ProcessStage::Recurse),
        },
        total_duration: total_duration(events),
    })
}
