//! # Set Subcommand
//!
//! Case-level configuration: crime date, penalty span, crime-type label.
//! Saves and re-derives the verdict on every change.

use anyhow::bail;
use clap::Args;

use plazo_case::{save_case, DirectoryStore};
use plazo_engine::recompute;

use crate::{open_case, print_verdict, resolve_today};

/// Arguments for `plazo set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Crime date, DD/MM/YYYY.
    #[arg(long)]
    pub crime_date: Option<String>,

    /// Maximum statutory penalty in years (clamped to 2..=12).
    #[arg(long)]
    pub penalty_years: Option<u32>,

    /// Free-text crime label.
    #[arg(long)]
    pub crime_type: Option<String>,

    /// Evaluate "today" as this date instead of the current date.
    #[arg(long)]
    pub today: Option<String>,
}

/// Run `plazo set`.
pub fn run_set(args: &SetArgs, store: &mut DirectoryStore) -> anyhow::Result<u8> {
    if args.crime_date.is_none() && args.penalty_years.is_none() && args.crime_type.is_none() {
        bail!("nothing to set; pass --crime-date, --penalty-years, or --crime-type");
    }

    let mut case = open_case(store)?;
    if let Some(raw) = &args.crime_date {
        case.set_crime_date(plazo_core::parse_date(raw)?);
    }
    if let Some(years) = args.penalty_years {
        case.config.set_max_penalty_years(years);
    }
    if let Some(label) = &args.crime_type {
        case.config.crime_type = label.clone();
    }
    save_case(store, &case)?;

    let today = resolve_today(args.today.as_deref())?;
    let results = recompute(&case, today)?;
    print_verdict(&results);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{run_init, InitArgs};

    fn set_args() -> SetArgs {
        SetArgs {
            crime_date: None,
            penalty_years: None,
            crime_type: None,
            today: None,
        }
    }

    fn initialized_store() -> (tempfile::TempDir, DirectoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        run_init(&InitArgs { force: false }, &mut store).unwrap();
        (dir, store)
    }

    #[test]
    fn set_requires_at_least_one_field() {
        let (_dir, mut store) = initialized_store();
        assert!(run_set(&set_args(), &mut store).is_err());
    }

    #[test]
    fn set_crime_date_persists() {
        let (_dir, mut store) = initialized_store();
        let args = SetArgs {
            crime_date: Some("10/01/2020".to_string()),
            today: Some("01/07/2024".to_string()),
            ..set_args()
        };
        run_set(&args, &mut store).unwrap();
        let case = open_case(&store).unwrap();
        assert_eq!(
            case.config.crime_date,
            chrono::NaiveDate::from_ymd_opt(2020, 1, 10)
        );
    }

    #[test]
    fn set_penalty_years_is_clamped() {
        let (_dir, mut store) = initialized_store();
        let args = SetArgs {
            penalty_years: Some(99),
            ..set_args()
        };
        run_set(&args, &mut store).unwrap();
        let case = open_case(&store).unwrap();
        assert_eq!(case.config.max_penalty_years(), 12);
    }

    #[test]
    fn set_rejects_malformed_date() {
        let (_dir, mut store) = initialized_store();
        let args = SetArgs {
            crime_date: Some("2020-01-10".to_string()),
            ..set_args()
        };
        assert!(run_set(&args, &mut store).is_err());
        // Prior state retained.
        let case = open_case(&store).unwrap();
        assert!(case.config.crime_date.is_none());
    }
}
