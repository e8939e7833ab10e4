//! Loading persisted vocabularies from disk.

use super::format;
use crate::core::vocab::Vocabulary;
use crate::error::{Result, TokenizerError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Vocabulary loader - reads and validates a record stream.
pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Load a vocabulary file.
    ///
    /// I/O failures carry the path; decode failures are wrapped in
    /// [`TokenizerError::Corrupt`] with the path and the underlying reason.
    pub fn load(path: &Path) -> Result<Vocabulary> {
        let file = File::open(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|err| TokenizerError::Io {
                path: path.to_path_buf(),
                err,
            })?;

        let vocab = format::decode(&bytes).map_err(|e| TokenizerError::Corrupt {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        log::debug!(
            "loaded {} entries ({} merges) from {}",
            vocab.len(),
            vocab.merges().len(),
            path.display()
        );

        Ok(vocab)
    }

    /// Decode a vocabulary from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Vocabulary> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|err| TokenizerError::Io {
                path: "<reader>".into(),
                err,
            })?;
        format::decode(&bytes)
    }
}
