//! Pair counting for BPE training.
//!
//! This module counts adjacent symbol pairs over the whole symbol sequence
//! using a fixed pool of workers. Workers pull fixed-size chunks of
//! positions from a shared [`ChunkCursor`], count into a private table, and
//! return it; the coordinator sums the tables.

use super::cursor::ChunkCursor;
use ahash::AHashMap;
use bytepair_core::{Pair, Result, Symbol, TokenizerError};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Pair -> occurrence count for one iteration.
pub type PairCounts = AHashMap<Pair, u64>;

/// Parallel counter for adjacent pair frequencies.
pub struct PairCounter {
    pool: ThreadPool,
    chunk_size: usize,
}

impl PairCounter {
    /// Create a counter with `workers` threads claiming `chunk_size`
    /// positions at a time.
    pub fn new(workers: usize, chunk_size: usize) -> Result<Self> {
        if workers == 0 {
            return Err(TokenizerError::InvalidConfig(
                "worker pool needs at least one worker".to_string(),
            ));
        }
        if chunk_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pair-counter-{i}"))
            .build()
            .map_err(|e| TokenizerError::Training(format!("failed to start worker pool: {e}")))?;

        Ok(Self { pool, chunk_size })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Positions claimed per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Count every adjacent pair in `sequence`.
    ///
    /// Position `i` contributes `(sequence[i], sequence[i + 1])`. Each worker
    /// runs until the cursor is exhausted, so the returned totals do not
    /// depend on how chunks were spread over workers.
    pub fn count_pairs_parallel(&self, sequence: &[Symbol]) -> PairCounts {
        let positions = sequence.len().saturating_sub(1);
        if positions == 0 {
            return PairCounts::new();
        }

        let cursor = ChunkCursor::new(positions, self.chunk_size);
        let partials = self
            .pool
            .broadcast(|ctx| count_claimed(sequence, &cursor, ctx.index()));

        merge_counts(partials)
    }

    /// Count all pairs sequentially (for debugging or single-threaded use).
    pub fn count_pairs_sequential(sequence: &[Symbol]) -> PairCounts {
        let mut pair_counts = PairCounts::new();

        for window in sequence.windows(2) {
            *pair_counts.entry((window[0], window[1])).or_insert(0) += 1;
        }

        pair_counts
    }
}

fn count_claimed(sequence: &[Symbol], cursor: &ChunkCursor, worker: usize) -> PairCounts {
    let mut local = PairCounts::new();
    let mut chunks = 0usize;

    while let Some(range) = cursor.claim() {
        for i in range {
            *local.entry((sequence[i], sequence[i + 1])).or_insert(0) += 1;
        }
        chunks += 1;
    }

    log::trace!(
        "worker {} counted {} chunks, {} distinct pairs",
        worker,
        chunks,
        local.len()
    );
    local
}

fn merge_counts(partials: Vec<PairCounts>) -> PairCounts {
    let mut partials = partials.into_iter();
    let mut acc = partials.next().unwrap_or_default();

    for partial in partials {
        for (pair, count) in partial {
            *acc.entry(pair).or_insert(0) += count;
        }
    }

    acc
}
