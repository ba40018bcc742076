//! # Error Hierarchy
//!
//! Structured errors for the foundational types. Higher-level crates wrap
//! these in their own hierarchies via `#[from]`.

use thiserror::Error;

/// Errors from constructing or validating domain primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Event identifier is empty or contains characters outside
    /// `[a-z0-9_-]`.
    #[error("invalid event identifier: {0:?}")]
    InvalidEventId(String),

    /// Event display name is empty or whitespace-only.
    #[error("event name must not be empty")]
    EmptyEventName,
}

/// Errors from date parsing and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input text is not a valid `DD/MM/YYYY` date.
    #[error("invalid date {input:?}: expected DD/MM/YYYY")]
    Invalid {
        /// The rejected input text.
        input: String,
    },

    /// Year arithmetic left the representable date range.
    #[error("date arithmetic out of range")]
    OutOfRange,
}
