//! # Procedural Events
//!
//! The event model for a criminal-case timeline. Events are identified by
//! stable slugs, belong to one of the fixed procedural stages, and carry an
//! interruption flag marking the milestones that restart a limitation
//! clock. Recurse-stage events are spans (start and end date) with optional
//! appeal metadata that never participates in deadline computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ── Well-Known Identifiers ─────────────────────────────────────────────

/// Event identifiers the prescription pipeline and the starter event list
/// anchor on. The three limitation windows are bounded by `INDICTMENT`,
/// `INSTRUCTION_END`, and `SENTENCE`.
pub mod well_known {
    /// Opening of the instruction stage.
    pub const INSTRUCTION_START: &str = "instruction_start";
    /// First call to indagatory — restarts the limitation clock.
    pub const INDICTMENT: &str = "indictment";
    /// Indagatory declaration.
    pub const DECLARATION: &str = "declaration";
    /// Committal order.
    pub const PROCESSING: &str = "processing";
    /// Elevation-to-trial request — restarts the limitation clock.
    pub const INSTRUCTION_END: &str = "instruction_end";
    /// Trial citation decree — restarts the limitation clock.
    pub const TRIAL_CITATION: &str = "trial_citation";
    /// Sentence.
    pub const SENTENCE: &str = "sentence";
    /// Opening of the recurse stage (a span event).
    pub const RECURSE_START: &str = "recurse_start";
}

// ── Identifiers ────────────────────────────────────────────────────────

/// A stable event identifier, unique within a case's event set.
///
/// # Validation
///
/// Must be non-empty and limited to `[a-z0-9_-]`, the slug alphabet the
/// well-known identifiers use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EventId(String);

impl EventId {
    /// Create an event identifier, validating the slug alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEventId`] if the string is empty
    /// or contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid {
            return Err(ValidationError::InvalidEventId(raw));
        }
        Ok(Self(raw))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for EventId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ── Stages ─────────────────────────────────────────────────────────────

/// The fixed procedural stages an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStage {
    /// Investigation under the instructing judge.
    Instruction,
    /// Oral trial.
    Trial,
    /// Appeals.
    Recurse,
}

impl ProcessStage {
    /// All stages in procedural order.
    pub fn all() -> &'static [ProcessStage] {
        &[Self::Instruction, Self::Trial, Self::Recurse]
    }

    /// The canonical identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instruction => "instruction",
            Self::Trial => "trial",
            Self::Recurse => "recurse",
        }
    }

    /// Spanish display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instruction => "Etapa de Instrucción",
            Self::Trial => "Etapa de Juicio",
            Self::Recurse => "Etapa Recursiva",
        }
    }
}

impl std::fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Recurse Metadata ───────────────────────────────────────────────────

/// The kind of appeal a recurse-stage span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurseType {
    /// Ordinary appeal before the chamber.
    Apelacion,
    /// Cassation before the higher court.
    Casacion,
}

impl RecurseType {
    /// The canonical identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apelacion => "apelacion",
            Self::Casacion => "casacion",
        }
    }
}

impl std::fmt::Display for RecurseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── The Event ──────────────────────────────────────────────────────────

/// A dated (or not-yet-dated) milestone in the procedural timeline.
///
/// Events are never deleted from a case; user input only rewrites their
/// `date`, `end_date`, and metadata fields. `end_date`, when present, must
/// not precede `date` — the event store enforces this on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceduralEvent {
    /// Stable identifier, unique within the event set.
    pub id: EventId,
    /// Spanish display label. Not semantically load-bearing.
    pub name: String,
    /// When the event occurred; `None` means "not yet".
    pub date: Option<NaiveDate>,
    /// Close of a span event (e.g., an appeal with a start and end).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The procedural stage this event belongs to.
    pub stage: ProcessStage,
    /// Whether this event restarts a limitation clock.
    pub is_interruption: bool,
    /// Appeal kind; recurse-stage spans only, never used in computation.
    #[serde(default)]
    pub recurse_type: Option<RecurseType>,
    /// Intervening tribunal; recurse-stage spans only.
    #[serde(default)]
    pub tribunal: Option<String>,
}

impl ProceduralEvent {
    /// Create an undated event.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEventName`] if the display name is
    /// blank.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        stage: ProcessStage,
        is_interruption: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyEventName);
        }
        Ok(Self {
            id,
            name,
            date: None,
            end_date: None,
            stage,
            is_interruption,
            recurse_type: None,
            tribunal: None,
        })
    }

    /// Whether the event has occurred.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}
