//! # Init Subcommand
//!
//! Creates the case file, seeded with the starter event list, in the
//! state directory.

use anyhow::bail;
use clap::Args;

use plazo_case::{load_case, save_case, CaseFile, DirectoryStore};

/// Arguments for `plazo init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Replace an existing case instead of refusing.
    #[arg(long)]
    pub force: bool,
}

/// Run `plazo init`.
pub fn run_init(args: &InitArgs, store: &mut DirectoryStore) -> anyhow::Result<u8> {
    if !args.force && load_case(store)?.is_some() {
        bail!(
            "a case already exists in {}; use --force to replace it",
            store.root().display()
        );
    }

    let case = CaseFile::new();
    save_case(store, &case)?;
    tracing::info!(case_id = %case.id, "initialized case");
    println!("Causa creada: {}", case.id);
    println!("Eventos iniciales: {}", case.events().len());
    Ok(0)
}
