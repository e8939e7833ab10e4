//! Vocabulary storage and validation.
//!
//! A vocabulary is an append-only table indexed by symbol id. The first
//! [`LEAF_COUNT`] entries are self-referential leaves, one per byte value.
//! Every later entry decomposes into two symbols defined strictly before it,
//! so expanding any symbol always terminates.

use crate::core::sequence::{initial_sequence, merge_pair};
use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};

/// Identifier of a base unit (`0..256`) or a learned merge (`256..`).
pub type Symbol = u32;

/// Ordered pair of symbols: "left immediately followed by right".
pub type Pair = (Symbol, Symbol);

/// Number of leaf entries at the start of every vocabulary.
pub const LEAF_COUNT: usize = 256;

/// Append-only table mapping symbol id -> constituent pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pair>", into = "Vec<Pair>")]
pub struct Vocabulary {
    entries: Vec<Pair>,
}

impl Vocabulary {
    /// Create a vocabulary holding only the leaf table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a leaf-only vocabulary with room for `merges` more entries.
    pub fn with_capacity(merges: usize) -> Self {
        let mut entries = Vec::with_capacity(LEAF_COUNT + merges);
        entries.extend((0..LEAF_COUNT as Symbol).map(|id| (id, id)));
        Self { entries }
    }

    /// Build a vocabulary from raw entries, checking the leaf and
    /// backward-reference invariants for every id.
    pub fn from_entries(entries: Vec<Pair>) -> Result<Self> {
        if entries.len() < LEAF_COUNT {
            return Err(TokenizerError::TableTooShort {
                records: entries.len(),
            });
        }

        for (id, &pair) in entries.iter().enumerate() {
            check_entry(id as Symbol, pair)?;
        }

        Ok(Self { entries })
    }

    /// Append a merge and return the id assigned to it.
    ///
    /// The new id is always the previous length of the table.
    pub fn push_merge(&mut self, pair: Pair) -> Result<Symbol> {
        let id = Symbol::try_from(self.entries.len())
            .map_err(|_| TokenizerError::InvalidMerge("symbol space exhausted".to_string()))?;
        check_entry(id, pair)?;
        self.entries.push(pair);
        Ok(id)
    }

    /// Get the decomposition of a symbol.
    #[inline]
    pub fn get(&self, id: Symbol) -> Option<Pair> {
        self.entries.get(id as usize).copied()
    }

    /// Whether `id` is a self-referential leaf entry.
    #[inline]
    pub fn is_leaf(&self, id: Symbol) -> bool {
        matches!(self.get(id), Some((left, _)) if left == id)
    }

    /// Number of entries, leaves included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the leaf table is never absent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in id order.
    pub fn entries(&self) -> &[Pair] {
        &self.entries
    }

    /// Learned merges in creation order (ids `256..`).
    pub fn merges(&self) -> &[Pair] {
        &self.entries[LEAF_COUNT..]
    }

    /// Iterate over `(id, pair)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Pair)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, &pair)| (id as Symbol, pair))
    }

    /// Encode bytes by replaying the learned merges in creation order.
    ///
    /// Encoding the training corpus reproduces the sequence the trainer
    /// ended with.
    pub fn encode(&self, bytes: &[u8]) -> Vec<Symbol> {
        let mut current = initial_sequence(bytes);
        let mut scratch = Vec::with_capacity(current.len());

        for (offset, &pair) in self.merges().iter().enumerate() {
            if current.len() < 2 {
                break;
            }
            let id = (LEAF_COUNT + offset) as Symbol;
            if merge_pair(&current, pair, id, &mut scratch) > 0 {
                std::mem::swap(&mut current, &mut scratch);
            }
        }

        current
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Pair>> for Vocabulary {
    type Error = TokenizerError;

    fn try_from(entries: Vec<Pair>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<Vocabulary> for Vec<Pair> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.entries
    }
}

fn check_entry(id: Symbol, (left, right): Pair) -> Result<()> {
    if (id as usize) < LEAF_COUNT {
        if left != id || right != id {
            return Err(TokenizerError::InvalidLeaf {
                id,
                pair: (left, right),
            });
        }
    } else if left >= id || right >= id {
        return Err(TokenizerError::ForwardReference { id, left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_table() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.len(), LEAF_COUNT);
        assert!(vocab.merges().is_empty());
        for (id, pair) in vocab.iter() {
            assert_eq!(pair, (id, id));
            assert!(vocab.is_leaf(id));
        }
    }

    #[test]
    fn test_push_merge_assigns_next_id() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.push_merge((97, 97)).unwrap(), 256);
        assert_eq!(vocab.push_merge((256, 98)).unwrap(), 257);
        assert_eq!(vocab.get(257), Some((256, 98)));
        assert!(!vocab.is_leaf(256));
        assert_eq!(vocab.merges(), &[(97, 97), (256, 98)]);
    }

    #[test]
    fn test_push_merge_rejects_self_reference() {
        let mut vocab = Vocabulary::new();
        let err = vocab.push_merge((256, 1)).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::ForwardReference { id: 256, left: 256, right: 1 }
        ));
        assert_eq!(vocab.len(), LEAF_COUNT);
    }

    #[test]
    fn test_from_entries_validation() {
        let mut entries = Vocabulary::new().entries().to_vec();
        entries.push((10, 20));
        assert!(Vocabulary::from_entries(entries.clone()).is_ok());

        let mut bad_leaf = entries.clone();
        bad_leaf[5] = (5, 6);
        assert!(matches!(
            Vocabulary::from_entries(bad_leaf),
            Err(TokenizerError::InvalidLeaf { id: 5, .. })
        ));

        let mut forward = entries.clone();
        forward.push((300, 1));
        assert!(matches!(
            Vocabulary::from_entries(forward),
            Err(TokenizerError::ForwardReference { id: 257, .. })
        ));

        assert!(matches!(
            Vocabulary::from_entries(entries[..100].to_vec()),
            Err(TokenizerError::TableTooShort { records: 100 })
        ));
    }

    #[test]
    fn test_encode_replays_merges() {
        let mut vocab = Vocabulary::new();
        vocab.push_merge((b'a' as Symbol, b'b' as Symbol)).unwrap();
        vocab.push_merge((256, 256)).unwrap();

        assert_eq!(vocab.encode(b"ababab"), vec![257, 256]);
        assert_eq!(vocab.encode(b"ab ab"), vec![256, 32, 256]);
        assert!(vocab.encode(b"").is_empty());
    }

    #[test]
    fn test_serde_rejects_invalid_table() {
        let mut vocab = Vocabulary::new();
        vocab.push_merge((1, 2)).unwrap();

        let json = serde_json::to_string(&vocab).unwrap();
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);

        assert!(serde_json::from_str::<Vocabulary>("[[0,0],[1,1]]").is_err());
    }
}
