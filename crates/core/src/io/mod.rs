//! Vocabulary codec.
//!
//! This module provides the fixed-width binary record format and the
//! file-level helpers for saving and loading trained vocabularies.

pub mod format;
pub mod load;
pub mod save;

pub use format::{decode, encode, RECORD_WIDTH};
pub use load::VocabularyLoader;
pub use save::VocabularySaver;
