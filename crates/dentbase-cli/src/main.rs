use clap::{Parser, Subcommand};
use dentbase_core::{
    migrate::{MigrationError, MigrationSet, Runner},
    obs::{EventSink, MigrationEvent, StatusReport, status_report},
    store::{Store, StoreError},
};
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error as ThisError;
use time::format_description::well_known::Rfc3339;

///
/// Cli
///

#[derive(Parser)]
#[command(name = "dentbase", version, about = "DentBase schema and migration tool")]
struct Cli {
    /// Directory holding the schema snapshot.
    #[arg(
        long,
        env = "DENTBASE_DATA_DIR",
        default_value = "./dentbase_data",
        global = true
    )]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply every pending migration.
    Apply,

    /// Show the applied ledger and what would still run.
    Status,

    /// Revert applied migrations, newest first.
    ///
    /// Downs for collection creation are intentional no-ops: the ledger
    /// entry is dropped, the collection stays.
    Revert {
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },

    /// Summarize every collection in the store.
    Collections {
        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("render: {0}")]
    Render(#[from] serde_json::Error),
}

///
/// ConsoleSink
///

struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn record(&self, event: MigrationEvent) {
        match event {
            MigrationEvent::Applied { key, name } => println!("applied  {key} {name}"),
            MigrationEvent::Skipped { key, name } => println!("skipped  {key} {name}"),
            MigrationEvent::Reverted { key, name } => println!("reverted {key} {name}"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut store = Store::open(&cli.data_dir)?;
    let set = dentbase_dental::migrations()?;

    match &cli.command {
        Command::Apply => {
            let outcome = Runner::with_sink(&ConsoleSink).apply(&mut store, &set)?;
            println!("{} applied, {} skipped", outcome.applied, outcome.skipped);
        }
        Command::Status => print_status(&store, &set),
        Command::Revert { steps } => {
            let outcome = Runner::with_sink(&ConsoleSink).revert(&mut store, &set, *steps)?;
            println!(
                "{} reverted (collection removal is not rolled back)",
                outcome.reverted
            );
        }
        Command::Collections { json } => {
            let report = status_report(&store, &set);
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_collections(&report);
            }
        }
    }

    Ok(())
}

fn print_status(store: &Store, set: &MigrationSet) {
    for entry in store.applied() {
        let stamp = entry
            .applied_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "-".to_string());
        println!("applied  {} {} at {stamp}", entry.key, entry.name);
    }
    for migration in set {
        if !store.is_applied(migration.key) {
            println!("pending  {} {}", migration.key, migration.name);
        }
    }
}

fn print_collections(report: &StatusReport) {
    for collection in &report.collections {
        println!("{} ({})", collection.name, collection.kind);
        for field in &collection.fields {
            let required = if field.required { " required" } else { "" };
            match &field.target {
                Some(target) => println!(
                    "  {} {} -> {target}{required}",
                    field.name, field.field_type
                ),
                None => println!("  {} {}{required}", field.name, field.field_type),
            }
        }
    }
}
