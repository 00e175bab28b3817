#![allow(missing_docs)]

use std::{collections::BTreeSet, path::PathBuf, sync::Arc};

use seqbatch::{
    Dataset,
    DatasetOptions,
    SeqBatchError,
    Vocabulary,
    vocab::specials::MASK_INDEX,
};

type T = u32;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn train() -> Dataset<T> {
    Dataset::from_file(
        data_path("train.tsv"),
        DatasetOptions::new(10, 10)
            .with_src_max_vocab(50000)
            .with_tgt_max_vocab(50000),
    )
    .unwrap()
}

fn indexed_tokens(vocab: &Vocabulary<T>) -> BTreeSet<String> {
    vocab.tokens().map(|(_, token)| token.to_string()).collect()
}

fn counted_tokens(vocab: &Vocabulary<T>) -> BTreeSet<String> {
    vocab
        .token_counts()
        .map(|(token, _)| token.to_string())
        .collect()
}

#[test]
fn test_init_from_file() {
    let ds = train();

    assert_eq!(ds.len(), 100);
    assert_eq!(ds.stats().total_pairs, 103);
    assert_eq!(ds.stats().dropped_pairs, 3);
    assert_eq!(ds.input_vocab().get_vocab_size(), 32);
    assert_eq!(ds.output_vocab().get_vocab_size(), 36);
    assert_ne!(
        indexed_tokens(ds.input_vocab()),
        indexed_tokens(ds.output_vocab())
    );
}

#[test]
fn test_init_with_vocabulary() {
    let ds = train();

    let dev = Dataset::from_file(
        data_path("dev.tsv"),
        DatasetOptions::new(10, 10)
            .with_src_vocab(ds.input_vocab().clone())
            .with_tgt_vocab(ds.output_vocab().clone()),
    )
    .unwrap();
    assert_eq!(dev.input_vocab(), ds.input_vocab());
    assert_eq!(dev.output_vocab(), ds.output_vocab());
    assert!(Arc::ptr_eq(dev.input_vocab(), ds.input_vocab()));

    // The dev corpus shares no tokens with the training corpus.
    let dev_own: Dataset<T> =
        Dataset::from_file(data_path("dev.tsv"), DatasetOptions::new(10, 10)).unwrap();
    assert!(
        indexed_tokens(ds.input_vocab())
            .is_disjoint(&counted_tokens(dev_own.input_vocab()))
    );
    assert!(
        indexed_tokens(ds.output_vocab())
            .is_disjoint(&counted_tokens(dev_own.output_vocab()))
    );

    // So every dev example encodes as a lone MASK.
    let mut batches = 0;
    for batch in dev.make_batches(1).unwrap() {
        batches += 1;
        let (src, tgt) = batch.into_parts();
        assert_eq!(src[0], &[MASK_INDEX as T][..]);
        assert_eq!(tgt[0], &[MASK_INDEX as T][..]);
    }
    assert_eq!(batches, dev.len());
}

#[test]
fn test_init_with_vocabulary_file() {
    let ds = train();

    let dev: Dataset<T> = Dataset::from_file(
        data_path("dev.tsv"),
        DatasetOptions::new(10, 10)
            .with_src_vocab_path(data_path("src_vocab.txt"))
            .with_tgt_vocab_path(data_path("tgt_vocab.txt")),
    )
    .unwrap();

    assert_eq!(dev.input_vocab().get_vocab_size(), 8);
    assert_eq!(dev.output_vocab().get_vocab_size(), 8);
    assert_eq!(
        indexed_tokens(dev.input_vocab()),
        ["good day", "welcome", "MASK", "EOS", "thank you", "SOS", "hi", "hello"]
            .into_iter()
            .map(String::from)
            .collect::<BTreeSet<_>>()
    );
    assert_eq!(
        indexed_tokens(dev.output_vocab()),
        [
            "bienvenue",
            "MASK",
            "EOS",
            "SOS",
            "bonne journee",
            "salut",
            "Je vous remercie",
            "bonjour"
        ]
        .into_iter()
        .map(String::from)
        .collect::<BTreeSet<_>>()
    );
    assert_ne!(
        indexed_tokens(ds.input_vocab()),
        indexed_tokens(dev.input_vocab())
    );

    // "hello" and "hi" are known; "thanks" is not.
    assert_eq!(dev.data()[0].source, vec![3]);
    assert_eq!(dev.data()[1].source, vec![4]);
    assert_eq!(dev.data()[3].source, vec![0]);
    assert_eq!(dev.data()[0].target, vec![3]);
}

#[test]
fn test_vocab_path_must_be_a_vocabulary() {
    let res: seqbatch::Result<Dataset<T>> = Dataset::from_file(
        data_path("dev.tsv"),
        DatasetOptions::new(10, 10).with_src_vocab_path(data_path("")),
    );
    assert!(matches!(res, Err(SeqBatchError::NotAVocabulary { .. })));
}

#[test]
fn test_make_batches_with_larger_batch_size() {
    let ds = train();
    assert!(matches!(
        ds.make_batches(180),
        Err(SeqBatchError::BatchOverflow { .. })
    ));
}

#[test]
fn test_make_batches_with_exact_batch_size() {
    let ds = train();
    let batch_size = 76;
    let num_data = ds.len();
    let mut batches = ds.make_batches(batch_size).unwrap();

    let first = batches.next().unwrap();
    assert_eq!(first.source.len(), batch_size);
    assert_eq!(first.target.len(), batch_size);

    let second = batches.next().unwrap();
    assert_eq!(second.source.len(), num_data - batch_size);
    assert_eq!(second.target.len(), num_data - batch_size);

    assert!(batches.next().is_none());
}

#[test]
fn test_make_batches() {
    let ds = train();
    let batch_size = 10;

    let mut num_batches = 0;
    for batch in ds.make_batches(batch_size).unwrap() {
        num_batches += 1;
        assert_eq!(batch.source.len(), batch_size);
        assert_eq!(batch.target.len(), batch_size);
    }
    assert_eq!(num_batches, 10);
    assert_eq!(ds.num_batches(batch_size).unwrap(), 10);
}

#[test]
fn test_shuffle() {
    let mut ds = train();
    let data = ds.data().to_vec();

    ds.shuffle(None);
    assert_ne!(ds.data(), data.as_slice());
}

#[test]
fn test_shuffle_with_same_seed() {
    let mut ds = train();
    let original = ds.clone();

    ds.shuffle(Some(123));
    let seeded = ds.data().to_vec();

    ds.shuffle(None);
    assert_ne!(ds.data(), seeded.as_slice());

    let mut reseeded = original.clone();
    reseeded.shuffle(Some(123));
    assert_eq!(reseeded.data(), seeded.as_slice());
}

#[test]
fn test_vocab_round_trip_through_dataset() {
    let ds = train();

    tempdir::TempDir::new("seqbatch_test")
        .and_then(|dir| {
            let src_path = dir.path().join("src_vocab.txt");
            let tgt_path = dir.path().join("tgt_vocab.txt");
            ds.input_vocab().save(&src_path).unwrap();
            ds.output_vocab().save(&tgt_path).unwrap();

            let reloaded = Dataset::from_file(
                data_path("train.tsv"),
                DatasetOptions::new(10, 10)
                    .with_src_vocab_path(&src_path)
                    .with_tgt_vocab_path(&tgt_path),
            )
            .unwrap();

            assert_eq!(reloaded.input_vocab(), ds.input_vocab());
            assert_eq!(reloaded.output_vocab(), ds.output_vocab());
            assert_eq!(reloaded.len(), ds.len());

            // No MASK substitution for in-corpus tokens.
            for pair in reloaded.data() {
                assert!(!pair.source.contains(&0));
                assert!(!pair.target.contains(&0));
            }

            Ok(())
        })
        .unwrap();
}
