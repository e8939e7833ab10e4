//! Error types for the byte-pair encoding library.

use crate::core::vocab::{Pair, Symbol};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// A persisted table failed to decode
    #[error("corrupt vocabulary file {path}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: Box<TokenizerError>,
    },

    /// Byte length is not a whole number of records
    #[error("truncated record at byte offset {offset} (table is {len} bytes, records are 8 bytes wide)")]
    TruncatedRecord { len: usize, offset: usize },

    /// A stored symbol id was negative
    #[error("negative symbol id {value} at byte offset {offset}")]
    NegativeSymbol { offset: usize, value: i32 },

    /// Fewer records than the fixed leaf range
    #[error("table holds {records} records, expected at least the 256 leaf entries")]
    TableTooShort { records: usize },

    /// An entry in the leaf range does not refer to itself
    #[error("leaf entry {id} decomposes into {pair:?}, expected ({id}, {id})")]
    InvalidLeaf { id: Symbol, pair: Pair },

    /// A merged entry refers to itself or to a later entry
    #[error("entry {id} = ({left}, {right}) references a symbol not defined before it")]
    ForwardReference {
        id: Symbol,
        left: Symbol,
        right: Symbol,
    },

    /// Symbol id does not fit the on-disk record width
    #[error("symbol id {id} cannot be stored as a signed 32-bit value")]
    SymbolOverflow { id: Symbol },

    /// Symbol id not present in the vocabulary
    #[error("unknown symbol id: {0}")]
    UnknownSymbol(Symbol),

    /// Invalid merge rule
    #[error("invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during training
    #[error("training error: {0}")]
    Training(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
