//! Persisting trained vocabularies to disk.

use super::format;
use crate::core::vocab::Vocabulary;
use crate::error::{Result, TokenizerError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Vocabulary saver - writes the fixed-width record stream.
pub struct VocabularySaver<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> VocabularySaver<'a> {
    /// Create a new saver for `vocab`.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Write the vocabulary to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = format::encode(self.vocab)?;

        let io_err = |err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        log::debug!(
            "saved {} entries ({} bytes) to {}",
            self.vocab.len(),
            bytes.len(),
            path.display()
        );

        Ok(())
    }

    /// Write the record stream to any writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = format::encode(self.vocab)?;
        writer
            .write_all(&bytes)
            .map_err(|err| TokenizerError::Io {
                path: "<writer>".into(),
                err,
            })
    }
}
