//! Binary record layout for persisted vocabularies.
//!
//! A table is a flat run of 8-byte records, one per symbol id in ascending
//! order. Each record holds the left then right symbol as little-endian
//! signed 32-bit integers. There is no header, padding or length prefix;
//! the record count is the byte length divided by [`RECORD_WIDTH`].

use crate::core::vocab::{Symbol, Vocabulary};
use crate::error::{Result, TokenizerError};

/// Width in bytes of one `(left, right)` record.
pub const RECORD_WIDTH: usize = 8;

const FIELD_WIDTH: usize = RECORD_WIDTH / 2;

/// Serialize a vocabulary into its record stream.
///
/// Fails only if an id exceeds `i32::MAX`, which the on-disk format cannot
/// represent.
pub fn encode(vocab: &Vocabulary) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(vocab.len() * RECORD_WIDTH);

    for (left, right) in vocab.entries().iter().copied() {
        out.extend_from_slice(&to_field(left)?);
        out.extend_from_slice(&to_field(right)?);
    }

    Ok(out)
}

/// Reconstruct a vocabulary from its record stream.
///
/// Rejects partial trailing records, negative ids and any table that breaks
/// the leaf or backward-reference invariants. Nothing is truncated or padded.
pub fn decode(bytes: &[u8]) -> Result<Vocabulary> {
    let remainder = bytes.len() % RECORD_WIDTH;
    if remainder != 0 {
        return Err(TokenizerError::TruncatedRecord {
            len: bytes.len(),
            offset: bytes.len() - remainder,
        });
    }

    let mut entries = Vec::with_capacity(bytes.len() / RECORD_WIDTH);
    for (index, record) in bytes.chunks_exact(RECORD_WIDTH).enumerate() {
        let offset = index * RECORD_WIDTH;
        let (left, right) = record.split_at(FIELD_WIDTH);
        entries.push((
            from_field(left, offset)?,
            from_field(right, offset + FIELD_WIDTH)?,
        ));
    }

    Vocabulary::from_entries(entries)
}

fn to_field(id: Symbol) -> Result<[u8; FIELD_WIDTH]> {
    let value = i32::try_from(id).map_err(|_| TokenizerError::SymbolOverflow { id })?;
    Ok(value.to_le_bytes())
}

fn from_field(field: &[u8], offset: usize) -> Result<Symbol> {
    let value = i32::from_le_bytes([field[0], field[1], field[2], field[3]]);
    Symbol::try_from(value).map_err(|_| TokenizerError::NegativeSymbol { offset, value })
}
