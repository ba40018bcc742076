//! # Case Configuration
//!
//! The per-case parameters of the prescription computation: the crime date
//! (origin of the first limitation window) and the maximum statutory
//! penalty in whole years.
//!
//! ## Clamping Invariant
//!
//! `max_penalty_years` is clamped to [`MIN_PENALTY_YEARS`],
//! [`MAX_PENALTY_YEARS`] at this boundary — on the setter and on
//! deserialization — so the engine downstream never sees an out-of-range
//! span and never re-validates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lower bound of the configurable penalty span, in years.
pub const MIN_PENALTY_YEARS: u32 = 2;

/// Upper bound of the configurable penalty span, in years.
pub const MAX_PENALTY_YEARS: u32 = 12;

/// Per-case prescription parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseConfiguration {
    /// The date the offense occurred. `None` until the user sets it; the
    /// engine derives zero windows without it.
    pub crime_date: Option<NaiveDate>,
    /// Free-text crime label. Display only.
    pub crime_type: String,
    /// Statutory period applied uniformly to every window, in whole years.
    #[serde(deserialize_with = "deserialize_penalty_years")]
    max_penalty_years: u32,
}

impl CaseConfiguration {
    /// Create a configuration with no crime date and the minimum penalty.
    pub fn new() -> Self {
        Self {
            crime_date: None,
            crime_type: String::new(),
            max_penalty_years: MIN_PENALTY_YEARS,
        }
    }

    /// The configured penalty span in whole years. Always within bounds.
    pub fn max_penalty_years(&self) -> u32 {
        self.max_penalty_years
    }

    /// Set the penalty span, clamping to the legal bounds. Out-of-range
    /// input is never rejected.
    pub fn set_max_penalty_years(&mut self, years: u32) {
        self.max_penalty_years = clamp_penalty_years(years);
    }
}

impl Default for CaseConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_penalty_years(years: u32) -> u32 {
    years.clamp(MIN_PENALTY_YEARS, MAX_PENALTY_YEARS)
}

fn deserialize_penalty_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u32::deserialize(deserializer)?;
    Ok(clamp_penalty_years(raw))
}
