//! Training infrastructure for BPE vocabularies.
//!
//! This module provides the merge loop and the parallel pair counter it
//! runs on every iteration.

pub mod counter;
pub mod cursor;
pub mod observer;
pub mod trainer;

pub use counter::{PairCounter, PairCounts};
pub use cursor::ChunkCursor;
pub use observer::{
    LogObserver, MergeStep, NoopObserver, StopReason, TrainingObserver, TrainingSummary,
};
pub use trainer::{select_best, BpeTrainer, TrainingConfig, TrainingOutcome};
