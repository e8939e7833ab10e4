//! Symbol sequence construction and the merge rewrite pass.

use crate::core::vocab::{Pair, Symbol};

/// One symbol per input byte, valued as the byte itself.
pub fn initial_sequence(bytes: &[u8]) -> Vec<Symbol> {
    bytes.iter().map(|&b| Symbol::from(b)).collect()
}

/// Rewrite `input` into `output`, replacing every non-overlapping
/// occurrence of `pair` with `new_symbol`.
///
/// Single greedy left-to-right pass: a match consumes both positions, so
/// `[a, a, a]` merged on `(a, a)` becomes `[new, a]`. `output` is cleared
/// first and reused to avoid reallocating on every iteration.
///
/// Returns the number of replacements made.
pub fn merge_pair(
    input: &[Symbol],
    pair: Pair,
    new_symbol: Symbol,
    output: &mut Vec<Symbol>,
) -> usize {
    output.clear();
    output.reserve(input.len());

    let mut replaced = 0;
    let mut i = 0;

    while i < input.len() {
        if i + 1 < input.len() && input[i] == pair.0 && input[i + 1] == pair.1 {
            output.push(new_symbol);
            replaced += 1;
            i += 2;
        } else {
            output.push(input[i]);
            i += 1;
        }
    }

    replaced
}
