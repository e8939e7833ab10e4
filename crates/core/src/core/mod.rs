//! Core data model.
//!
//! Symbols, pairs and the append-only vocabulary, plus the rewrite pass
//! shared by training and encoding.

pub mod sequence;
pub mod vocab;

pub use sequence::{initial_sequence, merge_pair};
pub use vocab::{Pair, Symbol, Vocabulary, LEAF_COUNT};
