//! Train, persist, reload and inspect a vocabulary end to end.

use bytepair_core::{InspectOptions, Renderer, VocabularyLoader, VocabularySaver, LEAF_COUNT};
use bytepair_training::{BpeTrainer, NoopObserver, TrainingConfig};

fn trainer() -> BpeTrainer {
    BpeTrainer::new(TrainingConfig::default().with_workers(3).with_chunk_size(32)).unwrap()
}

#[test]
fn test_train_save_load_inspect() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let dest = dir.path().join("pairs.bin");
    std::fs::write(&source, b"aaaa").unwrap();

    let corpus = std::fs::read(&source).unwrap();
    let vocab = trainer().train(&corpus).unwrap();
    VocabularySaver::new(&vocab).save(&dest).unwrap();

    assert_eq!(std::fs::metadata(&dest).unwrap().len(), 257 * 8);

    let loaded = VocabularyLoader::load(&dest).unwrap();
    assert_eq!(loaded, vocab);

    let lines: Vec<String> = Renderer::new(&loaded)
        .inspect(InspectOptions::default())
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(lines.len(), 256);
    assert_eq!(lines.last().unwrap(), "256 => {aa}");
}

#[test]
fn test_reloaded_vocabulary_renders_training_sequence() {
    let text = "low lower lowest newer newest wider widest ".repeat(40);
    let outcome = trainer()
        .train_with(text.as_bytes(), &mut NoopObserver)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("vocab.bin");
    VocabularySaver::new(&outcome.vocab).save(&dest).unwrap();
    let loaded = VocabularyLoader::load(&dest).unwrap();

    assert!(loaded.len() > LEAF_COUNT);
    assert_eq!(loaded.encode(text.as_bytes()), outcome.sequence);

    // every symbol expands back to its slice of the corpus
    let renderer = Renderer::new(&loaded);
    let mut rebuilt = Vec::new();
    for &symbol in &outcome.sequence {
        renderer.expand_into(symbol, &mut rebuilt).unwrap();
    }
    assert_eq!(rebuilt, text.as_bytes());

    let rendered = renderer.render_sequence(&outcome.sequence).unwrap();
    assert!(rendered.contains('['));
}
