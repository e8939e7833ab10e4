//! Render command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Render command arguments.
#[derive(Parser)]
pub struct RenderCommand {
    /// Path to a saved vocabulary
    pub vocab: PathBuf,

    /// Text file to encode ("-" for stdin)
    pub input: String,

    /// Print symbol ids instead of the rendered text
    #[arg(long, default_value_t = false)]
    pub ids: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_core::{Renderer, VocabularyLoader};

pub fn run(cmd: RenderCommand) -> AnyhowResult<()> {
    let vocab = VocabularyLoader::load(&cmd.vocab)
        .with_context(|| format!("failed to load vocabulary {}", cmd.vocab.display()))?;

    // Read input (from stdin if "-")
    let input = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        std::fs::read(&cmd.input).with_context(|| format!("failed to read {}", cmd.input))?
    };

    let sequence = vocab.encode(&input);
    log::info!("{} bytes -> {} symbols", input.len(), sequence.len());

    if cmd.ids {
        let ids: Vec<String> = sequence.iter().map(|id| id.to_string()).collect();
        println!("{}", ids.join(" "));
    } else {
        println!("{}", Renderer::new(&vocab).render_sequence(&sequence)?);
    }

    Ok(())
}
