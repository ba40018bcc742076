//! # Engine Errors
//!
//! The conditions the source tool expressed as "render nothing" are
//! explicit variants here, so callers and tests can tell "no data yet"
//! from a computation error. Duration calculators return `Option` instead:
//! their only failure mode is "fewer than two dated events".

use thiserror::Error;

use plazo_core::DateError;

/// Errors from the prescription window pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrescriptionError {
    /// No crime date configured; the pipeline has no origin and derives
    /// zero windows.
    #[error("no crime date configured")]
    MissingCrimeDate,

    /// Deadline arithmetic failed.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Errors from timeline projection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// Projection needs a crime date and at least one dated event.
    #[error("timeline needs a crime date and at least one dated event")]
    InsufficientData,
}

/// Errors from the single-shot calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickError {
    /// Identifier not present in the crime-type registry.
    #[error("unknown crime type {0:?}")]
    UnknownCrimeType(String),

    /// Deadline arithmetic failed.
    #[error(transparent)]
    Date(#[from] DateError),
}
