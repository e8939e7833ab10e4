//! Shared work cursor for chunked parallel scans.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out contiguous, non-overlapping chunks of `0..end` to whichever
/// worker asks next.
///
/// Claiming is a single atomic fetch-and-add; workers hold nothing while
/// they process a chunk. Together the claimed ranges cover `0..end` exactly
/// once, whatever the number of workers or the order they run in.
#[derive(Debug)]
pub struct ChunkCursor {
    next: AtomicUsize,
    end: usize,
    chunk_size: usize,
}

impl ChunkCursor {
    /// Create a cursor over `0..end`. A zero chunk size is treated as 1.
    pub fn new(end: usize, chunk_size: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            end,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Claim the next unclaimed chunk, or `None` once the range is exhausted.
    pub fn claim(&self) -> Option<Range<usize>> {
        let start = self.next.fetch_add(self.chunk_size, Ordering::Relaxed);
        if start >= self.end {
            return None;
        }
        Some(start..self.end.min(start.saturating_add(self.chunk_size)))
    }

    /// End of the range being handed out.
    pub fn end(&self) -> usize {
        self.end
    }
}
