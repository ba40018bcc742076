//! # Persistence Boundary
//!
//! An injectable key-value store so the case model and the engine stay
//! pure and testable without a storage dependency. One record per key,
//! last-write-wins, single writer.
//!
//! [`MemoryStore`] backs tests; [`DirectoryStore`] backs the CLI with one
//! JSON file per key under a state directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::case::CaseFile;
use crate::error::StoreError;

/// Well-known store keys. Only [`keys::TIMELINE`] is written by this tool;
/// the remaining keys belong to sibling desk utilities sharing the same
/// state layout.
pub mod keys {
    /// Raffle participants.
    pub const PARTICIPANTS: &str = "participants";
    /// Raffle results.
    pub const RESULTS: &str = "results";
    /// Raffle statistics.
    pub const STATISTICS: &str = "statistics";
    /// The case file (configuration plus events).
    pub const TIMELINE: &str = "timeline";
}

/// A key-value blob store.
pub trait StateStore {
    /// Load the blob stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `blob` under `key`, replacing any previous record.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), StoreError>;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

// ── In-Memory Store ────────────────────────────────────────────────────

/// Volatile store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.records.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

// ── Directory Store ────────────────────────────────────────────────────

/// File-backed store: one `<key>.json` file per key under a state
/// directory. The directory is created on first save.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`. No filesystem access happens until
    /// the first load or save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The state directory this store reads and writes.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StateStore for DirectoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = std::fs::read_to_string(&path)?;
        tracing::debug!(key, path = %path.display(), "loaded state record");
        Ok(Some(blob))
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        std::fs::create_dir_all(&self.root)?;
        let path = self.record_path(key);
        std::fs::write(&path, blob)?;
        tracing::debug!(key, path = %path.display(), "saved state record");
        Ok(())
    }
}

// ── Case Helpers ───────────────────────────────────────────────────────

/// Serialize the case file under [`keys::TIMELINE`].
pub fn save_case<S: StateStore + ?Sized>(store: &mut S, case: &CaseFile) -> Result<(), StoreError> {
    let blob = serde_json::to_string_pretty(case)?;
    store.save(keys::TIMELINE, &blob)
}

/// Load the case file from [`keys::TIMELINE`], if one was saved.
pub fn load_case<S: StateStore + ?Sized>(store: &S) -> Result<Option<CaseFile>, StoreError> {
    match store.load(keys::TIMELINE)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use plazo_core::well_known;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load("timeline").unwrap().is_none());
        store.save("timeline", "{}").unwrap();
        assert_eq!(store.load("timeline").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.save("results", "first").unwrap();
        store.save("results", "second").unwrap();
        assert_eq!(store.load("results").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn stores_reject_invalid_keys() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.save("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.load("UPPER"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.load(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn well_known_keys_are_valid() {
        let store = MemoryStore::new();
        for key in [
            keys::PARTICIPANTS,
            keys::RESULTS,
            keys::STATISTICS,
            keys::TIMELINE,
        ] {
            assert!(store.load(key).is_ok(), "{key} should be a valid key");
        }
    }

    #[test]
    fn directory_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        assert!(store.load("timeline").unwrap().is_none());
        store.save("timeline", "{\"x\":1}").unwrap();
        assert_eq!(
            store.load("timeline").unwrap().as_deref(),
            Some("{\"x\":1}")
        );
        assert!(dir.path().join("timeline.json").exists());
    }

    #[test]
    fn directory_store_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("plazo");
        let mut store = DirectoryStore::new(&nested);
        store.save("timeline", "{}").unwrap();
        assert!(nested.join("timeline.json").exists());
    }

    #[test]
    fn case_roundtrip_through_store() {
        let mut store = MemoryStore::new();
        assert!(load_case(&store).unwrap().is_none());

        let mut case = CaseFile::new();
        case.set_crime_date(NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
        case.config.set_max_penalty_years(5);
        case.set_event_date(
            well_known::INDICTMENT,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        )
        .unwrap();
        save_case(&mut store, &case).unwrap();

        let loaded = load_case(&store).unwrap().unwrap();
        assert_eq!(loaded, case);
    }

    #[test]
    fn load_case_rejects_malformed_blob() {
        let mut store = MemoryStore::new();
        store.save(keys::TIMELINE, "not json").unwrap();
        assert!(matches!(load_case(&store), Err(StoreError::Serde(_))));
    }

    #[test]
    fn case_roundtrip_through_directory_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        let case = CaseFile::new();
        save_case(&mut store, &case).unwrap();
        let loaded = load_case(&store).unwrap().unwrap();
        assert_eq!(loaded, case);
    }
}
