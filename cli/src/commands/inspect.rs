//! Inspect command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to a saved vocabulary
    pub vocab: PathBuf,

    /// Also list symbol 0
    #[arg(long, default_value_t = false)]
    pub include_zero: bool,

    /// Emit one JSON object per entry instead of `id => {text}`
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_core::{InspectOptions, Renderer, VocabularyLoader};
use std::io::{self, BufWriter, Write};

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let vocab = VocabularyLoader::load(&cmd.vocab)
        .with_context(|| format!("failed to load vocabulary {}", cmd.vocab.display()))?;
    log::info!("loaded {} pairs", vocab.len());

    let options = InspectOptions {
        include_zero: cmd.include_zero,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for entry in Renderer::new(&vocab).inspect(options) {
        if cmd.json {
            serde_json::to_writer(&mut out, &entry)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", entry)?;
        }
    }

    out.flush()?;
    Ok(())
}
