//! # Case Errors
//!
//! Errors for case mutation and for the persistence boundary. The source
//! tool swallowed most of these conditions silently; here they are explicit
//! so callers can tell "no data yet" from misuse.

use chrono::NaiveDate;
use thiserror::Error;

use plazo_core::ValidationError;

/// Errors from mutating a case or its event set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// No event with the given identifier exists in the case.
    #[error("no event with id {0:?}")]
    EventNotFound(String),

    /// Two events in the set share an identifier.
    #[error("duplicate event id {0:?}")]
    DuplicateEventId(String),

    /// An event date may not precede the configured crime date.
    #[error("event date {date} precedes the crime date {crime_date}")]
    DateBeforeCrime {
        /// The rejected event date.
        date: NaiveDate,
        /// The configured crime date.
        crime_date: NaiveDate,
    },

    /// A span event's end may not precede its start.
    #[error("span end {end} precedes its start {start}")]
    SpanEndsBeforeStart {
        /// The span's start date.
        start: NaiveDate,
        /// The rejected end date.
        end: NaiveDate,
    },

    /// A span end date requires the span's start date to be set first.
    #[error("cannot set an end date on the undated event {0:?}")]
    EndDateWithoutStart(String),

    /// Invalid domain primitive.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key contains characters outside the slug alphabet `[a-z0-9_-]`.
    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    /// Underlying filesystem failure.
    #[error("store I/O failure")]
    Io(#[from] std::io::Error),

    /// A persisted blob did not round-trip as JSON.
    #[error("malformed persisted state")]
    Serde(#[from] serde_json::Error),
}
