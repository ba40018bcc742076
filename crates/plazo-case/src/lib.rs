//! # plazo-case — Case State
//!
//! Everything a single criminal case owns:
//!
//! - **Error** ([`error`]): structured errors for case mutation and
//!   persistence.
//!
//! - **Config** ([`config`]): case configuration — crime date, crime-type
//!   label, and the statutory penalty span clamped to its legal bounds.
//!
//! - **Store** ([`store`]): the ordered procedural event store with
//!   functional field updates.
//!
//! - **Case** ([`case`]): the case file aggregating configuration and
//!   events, with the mutation surface user input goes through.
//!
//! - **Defaults** ([`defaults`]): the starter event list every new case is
//!   seeded with.
//!
//! - **Reference** ([`reference`]): static crime-type and process-stage
//!   tables, consumed read-only.
//!
//! - **Persistence** ([`persistence`]): the injectable key-value store
//!   boundary keeping the rest of the crate pure.

pub mod case;
pub mod config;
pub mod defaults;
pub mod error;
pub mod persistence;
pub mod reference;
pub mod store;

// Re-export primary types for ergonomic imports.

pub use case::{CaseFile, CaseId};
pub use config::{CaseConfiguration, MAX_PENALTY_YEARS, MIN_PENALTY_YEARS};
pub use defaults::starter_events;
pub use error::{CaseError, StoreError};
pub use persistence::{keys, load_case, save_case, DirectoryStore, MemoryStore, StateStore};
pub use reference::{
    crime_type_registry, find_crime_type, process_stage_registry, CrimeType, ProcessStageInfo,
};
pub use store::{EventPatch, EventStore};
