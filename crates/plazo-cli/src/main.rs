//! # plazo CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps to a tracing EnvFilter.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plazo_case::DirectoryStore;
use plazo_cli::analyze::{run_analyze, AnalyzeArgs};
use plazo_cli::event::{run_event, EventArgs};
use plazo_cli::init::{run_init, InitArgs};
use plazo_cli::quick::{run_quick, QuickArgs};
use plazo_cli::set::{run_set, SetArgs};
use plazo_cli::timeline::{run_timeline, TimelineArgs};
use plazo_cli::DEFAULT_STATE_DIR;

/// Plazo — prescription tracking for criminal cases
///
/// Tracks the procedural timeline of one case per state directory,
/// derives the statutory-limitation windows, and projects the timeline
/// for rendering.
#[derive(Parser, Debug)]
#[command(name = "plazo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// State directory holding the case store.
    #[arg(long, global = true, default_value = DEFAULT_STATE_DIR)]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a case seeded with the starter event list.
    Init(InitArgs),

    /// Set case configuration (crime date, penalty years, crime type).
    Set(SetArgs),

    /// Date an event, close a span, or set appeal metadata.
    Event(EventArgs),

    /// Derive limitation windows, verdict, and durations.
    Analyze(AnalyzeArgs),

    /// Project dated events onto the rendering axis.
    Timeline(TimelineArgs),

    /// Single-shot prescription calculator over the crime-type table.
    Quick(QuickArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(state_dir = %cli.state_dir.display(), "plazo starting");

    let mut store = DirectoryStore::new(&cli.state_dir);
    let result = match cli.command {
        Commands::Init(args) => run_init(&args, &mut store),
        Commands::Set(args) => run_set(&args, &mut store),
        Commands::Event(args) => run_event(&args, &mut store),
        Commands::Analyze(args) => run_analyze(&args, &mut store),
        Commands::Timeline(args) => run_timeline(&args, &mut store),
        Commands::Quick(args) => run_quick(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
