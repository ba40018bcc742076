//! # Quick Subcommand
//!
//! The single-shot calculator: crime date plus a registry crime type,
//! without touching the stored case.

use anyhow::bail;
use clap::Args;

use plazo_case::crime_type_registry;
use plazo_core::format_date;
use plazo_engine::assess;

use crate::resolve_today;

/// Arguments for `plazo quick`.
#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Crime date, DD/MM/YYYY.
    #[arg(long)]
    pub crime_date: Option<String>,

    /// Crime type identifier from the registry (e.g., "robbery").
    #[arg(long)]
    pub crime_type: Option<String>,

    /// List the crime-type registry and exit.
    #[arg(long)]
    pub list: bool,

    /// Evaluate "today" as this date instead of the current date.
    #[arg(long)]
    pub today: Option<String>,
}

/// Run `plazo quick`.
pub fn run_quick(args: &QuickArgs) -> anyhow::Result<u8> {
    if args.list {
        for crime_type in crime_type_registry() {
            println!(
                "  {:<10} {} ({} años)",
                crime_type.id, crime_type.name, crime_type.prescription_years
            );
        }
        return Ok(0);
    }

    let (Some(crime_date), Some(crime_type)) = (&args.crime_date, &args.crime_type) else {
        bail!("pass --crime-date and --crime-type, or --list to see the registry");
    };

    let crime_date = plazo_core::parse_date(crime_date)?;
    let today = resolve_today(args.today.as_deref())?;
    let assessment = assess(crime_date, crime_type, today)?;

    println!(
        "Fecha de prescripción: {}",
        format_date(assessment.prescription_date)
    );
    if assessment.expired {
        println!("El caso ha prescrito");
    } else {
        println!("Días restantes: {}", assessment.days_remaining);
        if assessment.warning {
            println!("Advertencia: la prescripción está próxima");
        }
    }
    Ok(0)
}
