//! Token rendering.
//!
//! Two views of a vocabulary: full expansion of a symbol back to the bytes
//! it stands for, and a lossy debugging rendering of an encoded sequence
//! where merged symbols show up as `[id]` placeholders.

use crate::core::vocab::{Pair, Symbol, Vocabulary};
use crate::error::{Result, TokenizerError};
use serde::Serialize;
use std::fmt;

/// Options for [`Renderer::inspect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectOptions {
    /// Include symbol 0 (the NUL leaf). Listings start at id 1 otherwise.
    pub include_zero: bool,
}

/// One line of an inspect listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectEntry {
    pub id: Symbol,
    pub left: Symbol,
    pub right: Symbol,
    /// Expansion decoded as UTF-8, invalid sequences replaced.
    pub text: String,
}

impl fmt::Display for InspectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {{{}}}", self.id, self.text.escape_debug())
    }
}

/// Reconstructs readable output from a vocabulary.
pub struct Renderer<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> Renderer<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Expand a symbol to the bytes it denotes.
    pub fn expand(&self, id: Symbol) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.expand_into(id, &mut out)?;
        Ok(out)
    }

    /// Append the expansion of `id` to `out`.
    pub fn expand_into(&self, id: Symbol, out: &mut Vec<u8>) -> Result<()> {
        if self.vocab.get(id).is_none() {
            return Err(TokenizerError::UnknownSymbol(id));
        }
        push_expansion(self.vocab.entries(), id, out);
        Ok(())
    }

    /// Expand every entry in ascending id order.
    pub fn inspect(&self, options: InspectOptions) -> impl Iterator<Item = InspectEntry> + 'a {
        let vocab = self.vocab;
        let skip = usize::from(!options.include_zero);
        let mut buf = Vec::new();

        vocab.iter().skip(skip).map(move |(id, (left, right))| {
            buf.clear();
            push_expansion(vocab.entries(), id, &mut buf);
            InspectEntry {
                id,
                left,
                right,
                text: String::from_utf8_lossy(&buf).into_owned(),
            }
        })
    }

    /// Render an encoded sequence without expanding merged symbols.
    ///
    /// Runs of leaves are decoded together so multi-byte UTF-8 characters
    /// survive; every merged symbol prints as `[id]`.
    pub fn render_sequence(&self, sequence: &[Symbol]) -> Result<String> {
        let mut out = String::with_capacity(sequence.len());
        let mut leaves = Vec::new();

        for &symbol in sequence {
            if self.vocab.get(symbol).is_none() {
                return Err(TokenizerError::UnknownSymbol(symbol));
            }

            if self.vocab.is_leaf(symbol) {
                leaves.push(symbol as u8);
            } else {
                flush_leaves(&mut leaves, &mut out);
                out.push_str(&format!("[{symbol}]"));
            }
        }
        flush_leaves(&mut leaves, &mut out);

        Ok(out)
    }
}

// Ids are in range and reference only earlier entries, so indexing
// cannot fail and the walk terminates.
fn push_expansion(entries: &[Pair], id: Symbol, out: &mut Vec<u8>) {
    let mut stack = vec![id];

    while let Some(symbol) = stack.pop() {
        let (left, right) = entries[symbol as usize];
        if left == symbol {
            out.push(symbol as u8);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
}

fn flush_leaves(leaves: &mut Vec<u8>, out: &mut String) {
    if !leaves.is_empty() {
        out.push_str(&String::from_utf8_lossy(leaves));
        leaves.clear();
    }
}
