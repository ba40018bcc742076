//! # Analyze Subcommand
//!
//! Prints the full derivation for the stored case: limitation windows with
//! deadlines and per-window verdicts, the aggregate verdict, stage
//! durations, and the whole-process duration.

use clap::Args;

use plazo_case::DirectoryStore;
use plazo_core::{format_date, ProcessStage};
use plazo_engine::recompute;

use crate::{open_case, print_verdict, resolve_today};

/// Arguments for `plazo analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Evaluate "today" as this date instead of the current date.
    #[arg(long)]
    pub today: Option<String>,

    /// Emit the full derivation as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Run `plazo analyze`.
pub fn run_analyze(args: &AnalyzeArgs, store: &mut DirectoryStore) -> anyhow::Result<u8> {
    let case = open_case(store)?;
    let today = resolve_today(args.today.as_deref())?;
    let results = recompute(&case, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(0);
    }

    println!("Línea Temporal del Proceso Penal");
    if !case.config.crime_type.is_empty() {
        println!("Tipo de delito: {}", case.config.crime_type);
    }
    if let Some(crime_date) = case.config.crime_date {
        println!("Fecha del hecho: {}", format_date(crime_date));
    }
    println!(
        "Monto máximo de la pena: {} años",
        case.config.max_penalty_years()
    );
    println!();

    if let Some(report) = &results.prescription {
        println!("Análisis de Prescripción por Etapas");
        for window in &report.windows {
            println!("  {}", window.label);
            println!(
                "    Inicio: {}  Fin: {}",
                format_date(window.start_date),
                format_date(window.end_date)
            );
            println!(
                "    Fecha de prescripción: {}",
                format_date(window.deadline)
            );
            println!(
                "    Estado: {}",
                if window.expired {
                    "Prescripto"
                } else {
                    "No prescripto"
                }
            );
        }
        println!();
    }

    for stage in ProcessStage::all() {
        if let Some(span) = results.stage_durations.for_stage(*stage) {
            println!("{} — Duración: {}", stage.display_name(), span);
        }
    }
    if let Some(total) = results.total_duration {
        println!("Duración Total del Proceso: {total}");
    }

    print_verdict(&results);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{run_event, EventArgs};
    use crate::init::{run_init, InitArgs};
    use crate::set::{run_set, SetArgs};
    use plazo_core::well_known;

    fn initialized_store() -> (tempfile::TempDir, DirectoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        run_init(&InitArgs { force: false }, &mut store).unwrap();
        (dir, store)
    }

    #[test]
    fn analyze_runs_on_an_empty_case() {
        let (_dir, mut store) = initialized_store();
        let args = AnalyzeArgs {
            today: Some("01/07/2024".to_string()),
            json: false,
        };
        assert_eq!(run_analyze(&args, &mut store).unwrap(), 0);
    }

    #[test]
    fn analyze_json_on_a_dated_case() {
        let (_dir, mut store) = initialized_store();
        run_set(
            &SetArgs {
                crime_date: Some("10/01/2020".to_string()),
                penalty_years: Some(5),
                crime_type: None,
                today: Some("01/07/2024".to_string()),
            },
            &mut store,
        )
        .unwrap();
        run_event(
            &EventArgs {
                id: well_known::INDICTMENT.to_string(),
                date: Some("01/06/2023".to_string()),
                clear_date: false,
                end_date: None,
                clear_end_date: false,
                recurse_type: None,
                tribunal: None,
                today: Some("01/07/2024".to_string()),
            },
            &mut store,
        )
        .unwrap();

        let args = AnalyzeArgs {
            today: Some("01/07/2024".to_string()),
            json: true,
        };
        assert_eq!(run_analyze(&args, &mut store).unwrap(), 0);
    }

    #[test]
    fn analyze_fails_without_a_case() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        let args = AnalyzeArgs {
            today: None,
            json: false,
        };
        assert!(run_analyze(&args, &mut store).is_err());
    }
}
