//! Bytepair-core - Data model, codec and renderer for byte-pair encoding
//!
//! This crate provides the vocabulary table learned by byte-pair encoding
//! training, independent of how it was trained.
//!
//! # Features
//!
//! - Append-only [`Vocabulary`] with leaf and backward-reference invariants
//! - Greedy rewrite pass shared by training and encoding
//! - Fixed-width little-endian record codec for persisted tables
//! - Recursive expansion and debug rendering of symbols
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{io, Renderer, Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! let id = vocab.push_merge((b'a' as u32, b'a' as u32))?;
//!
//! let bytes = io::encode(&vocab)?;
//! let loaded = io::decode(&bytes)?;
//! assert_eq!(Renderer::new(&loaded).expand(id)?, b"aa");
//! # Ok::<(), bytepair_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use self::core::{initial_sequence, merge_pair, Pair, Symbol, Vocabulary, LEAF_COUNT};

pub mod io;
pub use io::{VocabularyLoader, VocabularySaver};

pub mod render;
pub use render::{InspectEntry, InspectOptions, Renderer};
