//! BPE trainer implementation.
//!
//! This module implements the merge loop: count pairs over the current
//! symbol sequence, pick the most frequent pair, append it to the
//! vocabulary, rewrite the sequence, and repeat until no pair occurs more
//! than once.

use super::counter::{PairCounter, PairCounts};
use super::observer::{MergeStep, NoopObserver, StopReason, TrainingObserver, TrainingSummary};
use bytepair_core::{
    initial_sequence, merge_pair, Pair, Result, Symbol, TokenizerError, Vocabulary,
};
use std::time::Instant;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Number of pair-counting workers
    pub workers: usize,
    /// Positions claimed per chunk by a counting worker
    pub chunk_size: usize,
    /// Stop after this many merges; `None` runs until no pair repeats
    pub max_iterations: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            chunk_size: 65_536,
            max_iterations: None,
        }
    }
}

impl TrainingConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check that the pool and chunk sizes are usable.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(TokenizerError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// Leaf table followed by the learned merges in creation order
    pub vocab: Vocabulary,
    /// The corpus as it stands after the last merge
    pub sequence: Vec<Symbol>,
    /// Number of merges performed
    pub iterations: usize,
    /// Why the loop ended
    pub stop: StopReason,
}

/// BPE trainer.
///
/// Owns the counting pool; the vocabulary and sequence are created fresh
/// for each call to [`BpeTrainer::train`] and never shared with workers
/// except as a read-only slice during counting.
pub struct BpeTrainer {
    config: TrainingConfig,
    counter: PairCounter,
}

impl BpeTrainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        let counter = PairCounter::new(config.workers, config.chunk_size)?;
        Ok(Self { config, counter })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on raw bytes and return the vocabulary.
    ///
    /// An empty input, or one where no adjacent pair repeats, yields the
    /// 256-entry leaf table.
    pub fn train(&self, corpus: &[u8]) -> Result<Vocabulary> {
        Ok(self.train_with(corpus, &mut NoopObserver)?.vocab)
    }

    /// Train on raw bytes, reporting each merge to `observer`.
    pub fn train_with<O>(&self, corpus: &[u8], observer: &mut O) -> Result<TrainingOutcome>
    where
        O: TrainingObserver + ?Sized,
    {
        let started = Instant::now();

        let mut vocab = Vocabulary::new();
        let mut sequence = initial_sequence(corpus);
        let mut scratch = Vec::with_capacity(sequence.len());
        let mut iterations = 0usize;

        log::debug!(
            "training on {} bytes with {} workers, chunk size {}",
            corpus.len(),
            self.counter.workers(),
            self.counter.chunk_size()
        );

        let stop = loop {
            if self
                .config
                .max_iterations
                .is_some_and(|cap| iterations >= cap)
            {
                break StopReason::IterationCap;
            }

            let step_started = Instant::now();
            let counts = self.counter.count_pairs_parallel(&sequence);

            let (pair, count) = match select_best(&counts) {
                Some(best) if best.1 > 1 => best,
                _ => break StopReason::Converged,
            };

            let symbol = vocab.push_merge(pair)?;
            let len_before = sequence.len();
            merge_pair(&sequence, pair, symbol, &mut scratch);
            std::mem::swap(&mut sequence, &mut scratch);

            observer.on_merge(&MergeStep {
                iteration: iterations,
                symbol,
                pair,
                count,
                len_before,
                len_after: sequence.len(),
                elapsed: step_started.elapsed(),
            });
            iterations += 1;
        };

        observer.on_finish(&TrainingSummary {
            iterations,
            vocab_size: vocab.len(),
            input_len: corpus.len(),
            final_len: sequence.len(),
            stop,
            elapsed: started.elapsed(),
        });

        Ok(TrainingOutcome {
            vocab,
            sequence,
            iterations,
            stop,
        })
    }
}

/// Pick the pair with the highest count.
///
/// Ties go to the lexicographically smallest `(left, right)`, so the choice
/// does not depend on hash map iteration order.
pub fn select_best(counts: &PairCounts) -> Option<(Pair, u64)> {
    counts
        .iter()
        .map(|(&pair, &count)| (pair, count))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_core::{io, Renderer, LEAF_COUNT};

    #[derive(Default)]
    struct Recorder {
        steps: Vec<MergeStep>,
        summary: Option<TrainingSummary>,
    }

    impl TrainingObserver for Recorder {
        fn on_merge(&mut self, step: &MergeStep) {
            self.steps.push(step.clone());
        }

        fn on_finish(&mut self, summary: &TrainingSummary) {
            self.summary = Some(summary.clone());
        }
    }

    fn trainer() -> BpeTrainer {
        BpeTrainer::new(TrainingConfig::default().with_workers(4).with_chunk_size(8)).unwrap()
    }

    fn check_invariants(vocab: &Vocabulary) {
        for (id, (left, right)) in vocab.iter() {
            if (id as usize) < LEAF_COUNT {
                assert_eq!((left, right), (id, id));
            } else {
                assert!(left < id && right < id, "entry {id} = ({left}, {right})");
            }
        }
    }

    #[test]
    fn test_run_of_four() {
        let outcome = trainer().train_with(b"aaaa", &mut NoopObserver).unwrap();

        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.stop, StopReason::Converged);
        assert_eq!(outcome.vocab.len(), 257);
        assert_eq!(outcome.vocab.merges(), &[(97, 97)]);
        assert_eq!(outcome.sequence, vec![256, 256]);
        assert_eq!(Renderer::new(&outcome.vocab).expand(256).unwrap(), b"aa");
    }

    #[test]
    fn test_empty_input() {
        let outcome = trainer().train_with(b"", &mut NoopObserver).unwrap();
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.vocab, Vocabulary::new());
        assert!(outcome.sequence.is_empty());
    }

    #[test]
    fn test_no_repeated_pair() {
        let vocab = trainer().train(b"abcdef").unwrap();
        assert_eq!(vocab.len(), LEAF_COUNT);
    }

    #[test]
    fn test_tie_break_prefers_smallest_pair() {
        // (a,b) and (c,d) both occur twice
        let vocab = trainer().train(b"cdcdabab").unwrap();
        assert_eq!(vocab.merges()[0], (97, 98));
    }

    #[test]
    fn test_select_best() {
        let mut counts = PairCounts::new();
        counts.insert((5, 1), 3);
        counts.insert((2, 9), 3);
        counts.insert((0, 0), 2);
        assert_eq!(select_best(&counts), Some(((2, 9), 3)));
        assert_eq!(select_best(&PairCounts::new()), None);
    }

    #[test]
    fn test_learns_nested_merges() {
        let vocab = trainer().train(b"abcabc").unwrap();
        assert_eq!(vocab.merges(), &[(97, 98), (256, 99)]);
        assert_eq!(Renderer::new(&vocab).expand(257).unwrap(), b"abc");
    }

    #[test]
    fn test_sequence_shrinks_every_iteration() {
        let text = "she sells sea shells by the sea shore ".repeat(20);
        let mut recorder = Recorder::default();
        let outcome = trainer().train_with(text.as_bytes(), &mut recorder).unwrap();

        assert!(outcome.iterations > 0);
        assert_eq!(recorder.steps.len(), outcome.iterations);

        let mut expected_len = text.len();
        for step in &recorder.steps {
            assert_eq!(step.len_before, expected_len);
            assert!(step.len_after < step.len_before);
            assert!(step.count > 1);
            expected_len = step.len_after;
        }

        let summary = recorder.summary.unwrap();
        assert_eq!(summary.final_len, outcome.sequence.len());
        assert_eq!(summary.vocab_size, outcome.vocab.len());
        check_invariants(&outcome.vocab);
    }

    #[test]
    fn test_deterministic_across_pool_shapes() {
        let text = "to be or not to be, that is the question ".repeat(30);

        let reference = io::encode(&trainer().train(text.as_bytes()).unwrap()).unwrap();
        for (workers, chunk_size) in [(1, 65_536), (3, 1), (10, 17)] {
            let config = TrainingConfig::default()
                .with_workers(workers)
                .with_chunk_size(chunk_size);
            let vocab = BpeTrainer::new(config).unwrap().train(text.as_bytes()).unwrap();
            assert_eq!(io::encode(&vocab).unwrap(), reference);
        }
    }

    #[test]
    fn test_iteration_cap() {
        let text = "abababab cdcdcdcd efefefef".as_bytes();
        let config = TrainingConfig::default().with_max_iterations(Some(2));
        let outcome = BpeTrainer::new(config)
            .unwrap()
            .train_with(text, &mut NoopObserver)
            .unwrap();

        assert_eq!(outcome.iterations, 2);
        assert_eq!(outcome.stop, StopReason::IterationCap);
        assert_eq!(outcome.vocab.merges().len(), 2);

        let zero = TrainingConfig::default().with_max_iterations(Some(0));
        let vocab = BpeTrainer::new(zero).unwrap().train(text).unwrap();
        assert_eq!(vocab.len(), LEAF_COUNT);
    }

    #[test]
    fn test_encode_reproduces_training_sequence() {
        let text = "abracadabra abracadabra abracadabra".as_bytes();
        let outcome = trainer().train_with(text, &mut NoopObserver).unwrap();
        assert_eq!(outcome.vocab.encode(text), outcome.sequence);
    }

    #[test]
    fn test_invalid_config() {
        let config = TrainingConfig::default().with_workers(0);
        assert!(matches!(
            BpeTrainer::new(config),
            Err(TokenizerError::InvalidConfig(_))
        ));
        assert!(TrainingConfig::default().with_chunk_size(0).validate().is_err());
    }
}
