//! # Timeline Projection
//!
//! Maps dated events onto a one-dimensional axis for rendering. Positions
//! are linear in elapsed days from the crime date, at a base density of
//! ten units per day scaled by the zoom factor. The axis never collapses
//! below a minimum span so near-empty cases still render a visible line.
//!
//! Scroll state stays with the caller; [`TimelineProjection::center_offset`]
//! only computes where a viewport should sit to center the median marker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plazo_case::CaseFile;
use plazo_core::days_between;

use crate::duration::DurationBreakdown;
use crate::error::TimelineError;

/// Axis units per elapsed day at zoom 1.
pub const BASE_UNITS_PER_DAY: f64 = 10.0;

/// Minimum axis length, in units.
pub const MIN_AXIS_UNITS: f64 = 100.0;

/// Multiplicative zoom step.
pub const ZOOM_STEP: f64 = 1.5;

/// Zoom bounds.
pub const MIN_ZOOM: f64 = 0.5;
/// Zoom bounds.
pub const MAX_ZOOM: f64 = 4.0;

// ── Zoom ───────────────────────────────────────────────────────────────

/// A zoom factor, stepped by [`ZOOM_STEP`] and clamped to
/// [[`MIN_ZOOM`], [`MAX_ZOOM`]].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom(f64);

impl Zoom {
    /// Create a zoom factor, clamping into bounds.
    pub fn new(factor: f64) -> Self {
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// The current factor.
    pub fn factor(&self) -> f64 {
        self.0
    }

    /// One step in.
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 * ZOOM_STEP)
    }

    /// One step out.
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

// ── Projection ─────────────────────────────────────────────────────────

/// One dated event placed on the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMarker {
    /// Event identifier.
    pub id: String,
    /// Spanish display label.
    pub name: String,
    /// The event's date.
    pub date: NaiveDate,
    /// Axis offset in units from the crime date.
    pub position: f64,
    /// Whether the event restarts a limitation clock (rendered
    /// distinctly).
    pub is_interruption: bool,
    /// Elapsed time from the previous marker, 30-day-month rule. `None`
    /// for the first marker.
    pub since_previous: Option<DurationBreakdown>,
}

/// The projected timeline: markers in date order plus the axis extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineProjection {
    /// The axis origin (the crime date).
    pub origin: NaiveDate,
    /// Markers ascending by date.
    pub markers: Vec<TimelineMarker>,
    /// Total axis length in units, never below [`MIN_AXIS_UNITS`].
    pub axis_length: f64,
    /// The zoom this projection was computed at.
    pub zoom: Zoom,
}

impl TimelineProjection {
    /// Scroll offset that centers the median marker in a viewport of the
    /// given width. Never negative.
    pub fn center_offset(&self, viewport_width: f64) -> f64 {
        let median = &self.markers[self.markers.len() / 2];
        (median.position - viewport_width / 2.0).max(0.0)
    }
}

/// Project the case's dated events onto the axis at the given zoom.
///
/// # Errors
///
/// [`TimelineError::InsufficientData`] without a crime date or without at
/// least one dated event.
pub fn project(case: &CaseFile, zoom: Zoom) -> Result<TimelineProjection, TimelineError> {
    let origin = case
        .config
        .crime_date
        .ok_or(TimelineError::InsufficientData)?;
    let dated = case.events().dated_sorted();
    if dated.is_empty() {
        return Err(TimelineError::InsufficientData);
    }

    let unit = BASE_UNITS_PER_DAY * zoom.factor();
    let mut markers = Vec::with_capacity(dated.len());
    let mut previous: Option<&plazo_core::ProceduralEvent> = None;
    for event in dated.iter().copied() {
        // `dated_sorted` guarantees a date.
        let Some(date) = event.date else { continue };
        markers.push(TimelineMarker {
            id: event.id.as_str().to_string(),
            name: event.name.clone(),
            date,
            position: days_between(origin, date) as f64 * unit,
            is_interruption: event.is_interruption,
            since_previous: previous.and_then(|p| crate::duration::duration_between(p, event)),
        });
        previous = Some(event);
    }

    let last_date = markers
        .last()
        .map(|m| m.date)
        .unwrap_or(origin);
    let axis_length = (days_between(origin, last_date) as f64 * unit).max(MIN_AXIS_UNITS);

    tracing::trace!(
        markers = markers.len(),
        axis_length,
        zoom = zoom.factor(),
        "projected timeline"
    );
    Ok(TimelineProjection {
        origin,
        markers,
        axis_length,
        zoom,
    })
}
