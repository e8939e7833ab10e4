//! Bytepair CLI - Command-line interface for byte-pair encoding tables.
//!
//! This is the main entry point for the `bytepair` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{InspectCommand, RenderCommand, TrainCommand};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "bytepair")]
#[command(about = "Train and inspect byte-pair encoding vocabularies", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a vocabulary from a text file and save it
    Train(TrainCommand),
    /// List every entry of a saved vocabulary with its expansion
    Inspect(InspectCommand),
    /// Encode a file with a saved vocabulary and print the symbol stream
    Render(RenderCommand),
}

// Without -v/-q the filter comes from RUST_LOG, defaulting to info.
fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => None,
        (q, _) if q >= 2 => Some(LevelFilter::Error),
        (1, _) => Some(LevelFilter::Warn),
        (_, 1) => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
        Commands::Render(cmd) => commands::render::run(cmd)?,
    }

    Ok(())
}
