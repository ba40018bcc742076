//! # plazo-engine — Derived Computation
//!
//! Pure functions from case state to everything the desk tool displays.
//! Nothing here reads the clock or touches storage; "today" is always a
//! parameter, sampled once per evaluation by the caller.
//!
//! - **Error** ([`error`]): explicit variants for the conditions the
//!   source tool degraded silently on.
//!
//! - **Prescription** ([`prescription`]): the three-window limitation
//!   pipeline and the prescribed/not-prescribed verdict. The core of the
//!   tool.
//!
//! - **Duration** ([`duration`]): elapsed-time calculators in the fixed
//!   30-day-month court approximation, with the Spanish display strings.
//!
//! - **Timeline** ([`timeline`]): projection of dated events onto a
//!   linear axis for rendering — positions, zoom, centering.
//!
//! - **Quick** ([`quick`]): the single-shot calculator over the static
//!   crime-type table.
//!
//! - **Derived** ([`derived`]): [`derived::recompute`], the one entry
//!   point callers invoke after every mutation.

pub mod derived;
pub mod duration;
pub mod error;
pub mod prescription;
pub mod quick;
pub mod timeline;

// Re-export primary types for ergonomic imports.

pub use derived::{recompute, DerivedResults, StageDurations};
pub use duration::{
    duration_between, stage_duration, total_duration, DurationBreakdown, TotalDuration,
};
pub use error::{PrescriptionError, QuickError, TimelineError};
pub use prescription::{evaluate, LimitationWindow, PrescriptionReport};
pub use quick::{assess, QuickAssessment, WARNING_THRESHOLD_DAYS};
pub use timeline::{project, TimelineMarker, TimelineProjection, Zoom};
