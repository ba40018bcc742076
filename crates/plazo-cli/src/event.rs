//! # Event Subcommand
//!
//! Dates a procedural event, closes a span, or sets appeal metadata. The
//! patch only touches the fields passed on the command line.

use anyhow::bail;
use clap::{Args, ValueEnum};

use plazo_case::{save_case, DirectoryStore, EventPatch};
use plazo_core::RecurseType;
use plazo_engine::recompute;

use crate::{open_case, print_verdict, resolve_today};

/// Appeal kind, as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RecurseTypeArg {
    /// Ordinary appeal before the chamber.
    Apelacion,
    /// Cassation before the higher court.
    Casacion,
}

impl From<RecurseTypeArg> for RecurseType {
    fn from(arg: RecurseTypeArg) -> Self {
        match arg {
            RecurseTypeArg::Apelacion => RecurseType::Apelacion,
            RecurseTypeArg::Casacion => RecurseType::Casacion,
        }
    }
}

/// Arguments for `plazo event`.
#[derive(Args, Debug)]
pub struct EventArgs {
    /// Event identifier (e.g., "indictment", "sentence").
    #[arg(long)]
    pub id: String,

    /// Occurrence date, DD/MM/YYYY.
    #[arg(long, conflicts_with = "clear_date")]
    pub date: Option<String>,

    /// Clear the occurrence date.
    #[arg(long)]
    pub clear_date: bool,

    /// Span end date, DD/MM/YYYY.
    #[arg(long, conflicts_with = "clear_end_date")]
    pub end_date: Option<String>,

    /// Clear the span end date.
    #[arg(long)]
    pub clear_end_date: bool,

    /// Appeal kind for recurse-stage spans.
    #[arg(long, value_enum)]
    pub recurse_type: Option<RecurseTypeArg>,

    /// Intervening tribunal for recurse-stage spans.
    #[arg(long)]
    pub tribunal: Option<String>,

    /// Evaluate "today" as this date instead of the current date.
    #[arg(long)]
    pub today: Option<String>,
}

fn build_patch(args: &EventArgs) -> anyhow::Result<EventPatch> {
    let mut patch = EventPatch::new();
    if let Some(raw) = &args.date {
        patch = patch.with_date(Some(plazo_core::parse_date(raw)?));
    } else if args.clear_date {
        patch = patch.with_date(None);
    }
    if let Some(raw) = &args.end_date {
        patch = patch.with_end_date(Some(plazo_core::parse_date(raw)?));
    } else if args.clear_end_date {
        patch = patch.with_end_date(None);
    }
    if let Some(kind) = args.recurse_type {
        patch = patch.with_recurse_type(Some(kind.into()));
    }
    if let Some(tribunal) = &args.tribunal {
        patch = patch.with_tribunal(Some(tribunal.clone()));
    }
    Ok(patch)
}

/// Run `plazo event`.
pub fn run_event(args: &EventArgs, store: &mut DirectoryStore) -> anyhow::Result<u8> {
    let patch = build_patch(args)?;
    if patch.is_empty() {
        bail!("nothing to update for event {:?}", args.id);
    }

    let mut case = open_case(store)?;
    case.update_event(&args.id, patch)?;
    save_case(store, &case)?;
    tracing::info!(event = %args.id, "updated event");

    let today = resolve_today(args.today.as_deref())?;
    let results = recompute(&case, today)?;
    print_verdict(&results);
    Ok(0)
}
