//! # plazo-cli — CLI for the Plazo Desk Tool
//!
//! Provides the `plazo` command-line interface over a file-backed case
//! store. One case per state directory; every mutating subcommand saves
//! and immediately re-derives the prescription verdict, so the verdict on
//! screen always reflects the state on disk.
//!
//! ## Subcommands
//!
//! - `plazo init` — Create a case seeded with the starter events.
//! - `plazo set` — Crime date, penalty years, crime-type label.
//! - `plazo event` — Date an event, close a span, set appeal metadata.
//! - `plazo analyze` — Limitation windows, verdict, durations.
//! - `plazo timeline` — Projected marker positions at a zoom level.
//! - `plazo quick` — Single-shot calculator over the crime-type table.

pub mod analyze;
pub mod event;
pub mod init;
pub mod quick;
pub mod set;
pub mod timeline;

use anyhow::Context;
use chrono::{NaiveDate, Utc};

use plazo_case::{load_case, CaseFile, DirectoryStore};

/// Default state directory, relative to the working directory.
pub const DEFAULT_STATE_DIR: &str = ".plazo";

/// Load the case from the store, failing with a hint when none exists.
pub fn open_case(store: &DirectoryStore) -> anyhow::Result<CaseFile> {
    load_case(store)
        .context("could not read the case store")?
        .context("no case in this state directory; run `plazo init` first")
}

/// Resolve "today": an explicit `DD/MM/YYYY` override, or the current UTC
/// date. The override keeps analyses reproducible in scripts and tests.
pub fn resolve_today(explicit: Option<&str>) -> anyhow::Result<NaiveDate> {
    match explicit {
        Some(raw) => Ok(plazo_core::parse_date(raw)?),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Print the verdict line shown after every mutation and analysis.
pub fn print_verdict(results: &plazo_engine::DerivedResults) {
    match &results.prescription {
        None => println!("Sin fecha del hecho: no hay análisis de prescripción."),
        Some(report) if report.prescribed() => {
            println!("ACCIÓN PRESCRIPTA");
            for window in report.expired_windows() {
                println!(
                    "  Prescripción en etapa: {} (venció el {})",
                    window.label,
                    plazo_core::format_date(window.deadline)
                );
            }
        }
        Some(_) => println!("No prescripto."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plazo_case::save_case;

    #[test]
    fn open_case_fails_without_init() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        let err = open_case(&store).unwrap_err();
        assert!(format!("{err}").contains("plazo init"));
    }

    #[test]
    fn open_case_roundtrips_a_saved_case() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        let case = CaseFile::new();
        save_case(&mut store, &case).unwrap();
        let loaded = open_case(&store).unwrap();
        assert_eq!(loaded.id, case.id);
    }

    #[test]
    fn resolve_today_parses_override() {
        let date = resolve_today(Some("10/01/2020")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
    }

    #[test]
    fn resolve_today_rejects_malformed_override() {
        assert!(resolve_today(Some("2020-01-10")).is_err());
    }

    #[test]
    fn resolve_today_defaults_to_now() {
        assert!(resolve_today(None).is_ok());
    }
}
