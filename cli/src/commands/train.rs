//! Train command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training text
    pub source: PathBuf,

    /// Where to write the vocabulary
    pub destination: PathBuf,

    /// Number of pair-counting workers
    #[arg(short, long, default_value_t = 10)]
    pub workers: usize,

    /// Positions each worker claims at a time
    #[arg(long, default_value_t = 65_536)]
    pub chunk_size: usize,

    /// Stop after this many merges
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Log progress every N merges
    #[arg(long, default_value_t = 100)]
    pub log_every: usize,

    /// Print the compressed corpus after training
    #[arg(long, default_value_t = false)]
    pub show_tokens: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_core::{Renderer, VocabularySaver};
use bytepair_training::{BpeTrainer, LogObserver, TrainingConfig};
use std::fs;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let corpus = fs::read(&cmd.source)
        .with_context(|| format!("failed to read source file {}", cmd.source.display()))?;
    log::info!("read {} bytes from {}", corpus.len(), cmd.source.display());

    let config = TrainingConfig::default()
        .with_workers(cmd.workers)
        .with_chunk_size(cmd.chunk_size)
        .with_max_iterations(cmd.max_iterations);
    let trainer = BpeTrainer::new(config).context("invalid training configuration")?;

    let mut observer = LogObserver::new(cmd.log_every);
    let outcome = trainer.train_with(&corpus, &mut observer)?;

    VocabularySaver::new(&outcome.vocab)
        .save(&cmd.destination)
        .with_context(|| format!("failed to save vocabulary to {}", cmd.destination.display()))?;

    if cmd.show_tokens {
        let rendered = Renderer::new(&outcome.vocab).render_sequence(&outcome.sequence)?;
        println!("{}", rendered);
    }

    println!(
        "Saved {} pairs ({} merges) to {}",
        outcome.vocab.len(),
        outcome.iterations,
        cmd.destination.display()
    );

    Ok(())
}
