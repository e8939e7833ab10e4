//! Observability hooks for the training loop.
//!
//! The trainer keeps no timing or progress state of its own. It reports each
//! merge and the final summary to a [`TrainingObserver`], which may log,
//! collect statistics, or ignore them.

use bytepair_core::{Pair, Symbol};
use std::time::Duration;

/// Why the training loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No adjacent pair occurs more than once.
    Converged,
    /// The configured iteration cap was reached.
    IterationCap,
}

/// One completed merge iteration.
#[derive(Debug, Clone)]
pub struct MergeStep {
    /// Zero-based iteration index
    pub iteration: usize,
    /// Id assigned to the merged pair
    pub symbol: Symbol,
    /// The merged pair
    pub pair: Pair,
    /// Occurrences of the pair when it was selected
    pub count: u64,
    /// Sequence length before the rewrite
    pub len_before: usize,
    /// Sequence length after the rewrite
    pub len_after: usize,
    /// Wall time spent counting and rewriting
    pub elapsed: Duration,
}

/// Summary of a finished training run.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub iterations: usize,
    pub vocab_size: usize,
    pub input_len: usize,
    pub final_len: usize,
    pub stop: StopReason,
    pub elapsed: Duration,
}

impl TrainingSummary {
    /// Input bytes per output symbol (1.0 for an empty input).
    pub fn compression_ratio(&self) -> f64 {
        if self.final_len == 0 {
            1.0
        } else {
            self.input_len as f64 / self.final_len as f64
        }
    }
}

/// Receives training progress. Both hooks default to doing nothing.
pub trait TrainingObserver {
    fn on_merge(&mut self, _step: &MergeStep) {}

    fn on_finish(&mut self, _summary: &TrainingSummary) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {}

/// Forwards progress to the `log` facade.
///
/// Every merge is logged at debug level; every `interval`-th merge and the
/// summary at info level, with a running average iteration time.
#[derive(Debug, Clone)]
pub struct LogObserver {
    interval: usize,
    total: Duration,
}

impl LogObserver {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            total: Duration::ZERO,
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl TrainingObserver for LogObserver {
    fn on_merge(&mut self, step: &MergeStep) {
        self.total += step.elapsed;

        log::debug!(
            "merge {}: {:?} -> {} (count {}, len {} -> {}, {:.2?})",
            step.iteration,
            step.pair,
            step.symbol,
            step.count,
            step.len_before,
            step.len_after,
            step.elapsed
        );

        let done = step.iteration + 1;
        if done % self.interval == 0 {
            log::info!(
                "{} merges, sequence length {}, avg {:.2?}/iteration",
                done,
                step.len_after,
                self.total / done as u32
            );
        }
    }

    fn on_finish(&mut self, summary: &TrainingSummary) {
        log::info!(
            "training stopped ({:?}) after {} merges in {:.2?}: {} entries, {} -> {} symbols ({:.2}x)",
            summary.stop,
            summary.iterations,
            summary.elapsed,
            summary.vocab_size,
            summary.input_len,
            summary.final_len,
            summary.compression_ratio()
        );
    }
}
