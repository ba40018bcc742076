//! # Case File
//!
//! The aggregate a session edits: configuration plus the event store,
//! identified by a stable case id. All user input lands here; the methods
//! validate what the source tool enforced ad hoc in its input handlers
//! (dates never precede the crime date, spans stay ordered) and return
//! explicit errors instead of silently ignoring bad input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CaseConfiguration;
use crate::defaults::starter_events;
use crate::error::CaseError;
use crate::store::{EventPatch, EventStore};

// ── Identifiers ────────────────────────────────────────────────────────

/// A unique identifier for a case file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(Uuid);

impl CaseId {
    /// Create a new random case identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a case identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case:{}", self.0)
    }
}

// ── The Case File ──────────────────────────────────────────────────────

/// A criminal case: configuration plus its procedural event set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Unique case identifier.
    pub id: CaseId,
    /// Prescription parameters.
    pub config: CaseConfiguration,
    events: EventStore,
}

impl CaseFile {
    /// Create a case seeded with the starter event list.
    pub fn new() -> Self {
        let events = EventStore::new(starter_events())
            .expect("starter event ids are unique");
        Self {
            id: CaseId::new(),
            config: CaseConfiguration::new(),
            events,
        }
    }

    /// The event set, read-only. Mutation goes through
    /// [`CaseFile::update_event`].
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Set the crime date.
    pub fn set_crime_date(&mut self, date: NaiveDate) {
        self.config.crime_date = Some(date);
    }

    /// Apply a field patch to one event.
    ///
    /// Beyond the store-level span invariant, a patched date (start or
    /// end) may not precede the configured crime date — the rule the
    /// source tool applied at every date input.
    ///
    /// # Errors
    ///
    /// [`CaseError::DateBeforeCrime`] for a date before the crime date,
    /// plus everything [`EventStore::update`] rejects.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> Result<(), CaseError> {
        if let Some(crime_date) = self.config.crime_date {
            for touched in [&patch.date, &patch.end_date] {
                if let Some(Some(date)) = touched {
                    if *date < crime_date {
                        return Err(CaseError::DateBeforeCrime {
                            date: *date,
                            crime_date,
                        });
                    }
                }
            }
        }
        self.events.update(id, patch)
    }

    /// Shorthand: date one event.
    pub fn set_event_date(&mut self, id: &str, date: NaiveDate) -> Result<(), CaseError> {
        self.update_event(id, EventPatch::new().with_date(Some(date)))
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::new()
    }
}
