//! Bytepair-training - BPE training infrastructure
//!
//! This crate learns a byte-pair encoding vocabulary from raw bytes by
//! repeatedly merging the most frequent adjacent pair of symbols.
//!
//! # Features
//!
//! - Pair counting over a shared chunk cursor with a fixed worker pool
//! - Deterministic merge selection (ties go to the smallest pair)
//! - Optional iteration cap and observer hooks for progress reporting
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig::default().with_workers(2))?;
//! let vocab = trainer.train(b"aaaa")?;
//!
//! assert_eq!(vocab.merges(), &[(97, 97)]);
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    select_best, BpeTrainer, ChunkCursor, LogObserver, MergeStep, NoopObserver, PairCounter,
    PairCounts, StopReason, TrainingConfig, TrainingObserver, TrainingOutcome, TrainingSummary,
};
