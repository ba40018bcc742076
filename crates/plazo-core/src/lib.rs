//! # plazo-core — Foundational Types
//!
//! Domain primitives shared by every Plazo crate:
//!
//! - **Date** ([`date`]): civil-date parsing and formatting in the
//!   `DD/MM/YYYY` court convention, whole-year addition with last-valid-day
//!   clamping, and calendar day differences.
//!
//! - **Event** ([`event`]): the procedural event model — validated event
//!   identifiers, the fixed stage enumeration, and span/interruption
//!   metadata.
//!
//! - **Error** ([`error`]): structured error hierarchy for validation and
//!   date arithmetic.

pub mod date;
pub mod error;
pub mod event;

// Re-export primary types for ergonomic imports.

pub use date::{add_years, days_between, format_date, parse_date, DATE_FORMAT};
pub use error::{DateError, ValidationError};
pub use event::{well_known, EventId, ProceduralEvent, ProcessStage, RecurseType};
