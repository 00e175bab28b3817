//! # Vocabulary Sources
//!
//! A [`crate::dataset::Dataset`] resolves one [`VocabSource`] per side, once,
//! at construction.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    errors::{Result, SeqBatchError},
    types::TokenType,
    vocab::{Vocabulary, io::load_vocab_path},
};

/// Where a dataset side gets its [`Vocabulary`] from.
#[derive(Debug, Clone)]
pub enum VocabSource<T: TokenType = u32> {
    /// Share an existing vocabulary; it is never mutated.
    Reuse(Arc<Vocabulary<T>>),

    /// Load a saved vocabulary; then treat it as [`VocabSource::Reuse`].
    LoadFromPath(PathBuf),

    /// Build a new vocabulary from the dataset's own sequences.
    BuildFresh {
        /// The vocabulary capacity; `None` is unbounded.
        max_size: Option<usize>,
    },
}

impl<T: TokenType> Default for VocabSource<T> {
    fn default() -> Self {
        Self::BuildFresh { max_size: None }
    }
}

impl<T: TokenType> From<Vocabulary<T>> for VocabSource<T> {
    fn from(vocab: Vocabulary<T>) -> Self {
        Self::Reuse(Arc::new(vocab))
    }
}

impl<T: TokenType> From<Arc<Vocabulary<T>>> for VocabSource<T> {
    fn from(vocab: Arc<Vocabulary<T>>) -> Self {
        Self::Reuse(vocab)
    }
}

impl<T: TokenType> From<PathBuf> for VocabSource<T> {
    fn from(path: PathBuf) -> Self {
        Self::LoadFromPath(path)
    }
}

impl<T: TokenType> From<&Path> for VocabSource<T> {
    fn from(path: &Path) -> Self {
        Self::LoadFromPath(path.to_path_buf())
    }
}

impl<T: TokenType> VocabSource<T> {
    /// Build a fresh vocabulary, optionally capped.
    pub fn fresh(max_size: Option<usize>) -> Self {
        Self::BuildFresh { max_size }
    }

    /// Will resolution build a new vocabulary?
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::BuildFresh { .. })
    }

    /// Resolve this source to a vocabulary.
    ///
    /// `sequences` are only consumed by [`VocabSource::BuildFresh`].
    ///
    /// ## Errors
    /// * [`SeqBatchError::NotAVocabulary`] if a [`VocabSource::LoadFromPath`]
    ///   target exists but is not a readable vocabulary file.
    /// * [`SeqBatchError::VocabOverflow`] if `T` cannot index the loaded tokens.
    /// * [`SeqBatchError::Io`] if the target cannot be opened.
    pub fn resolve<I>(
        self,
        sequences: I,
    ) -> Result<Arc<Vocabulary<T>>>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        match self {
            Self::Reuse(vocab) => {
                log::debug!("reusing vocabulary: {vocab}");
                Ok(vocab)
            }
            Self::LoadFromPath(path) => {
                let vocab = load_checked(&path)?;
                log::debug!("loaded vocabulary: {vocab}");
                Ok(Arc::new(vocab))
            }
            Self::BuildFresh { max_size } => {
                let mut vocab = match max_size {
                    Some(max_size) => Vocabulary::new(max_size),
                    None => Vocabulary::unbounded(),
                };
                for sequence in sequences {
                    vocab.add_sequence(sequence);
                }

                let excluded = vocab.unindexed_token_count();
                if excluded > 0 {
                    log::warn!("vocabulary full; {excluded} distinct tokens will encode as MASK");
                }
                log::debug!("built vocabulary: {vocab}");
                Ok(Arc::new(vocab))
            }
        }
    }
}

fn load_checked<T: TokenType>(path: &Path) -> Result<Vocabulary<T>> {
    if path.exists() && !path.is_file() {
        return Err(SeqBatchError::NotAVocabulary {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    match load_vocab_path(path) {
        Err(SeqBatchError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            Err(SeqBatchError::NotAVocabulary {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
        }
        res => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type T = u32;

    const SEQUENCES: [&[&str]; 4] = [
        &["I", "am", "fat"],
        &["I", "am", "busy"],
        &["I", "am", "calm"],
        &["I", "am", "cold"],
    ];

    #[test]
    fn test_build_fresh() {
        let vocab = VocabSource::<T>::default().resolve(SEQUENCES).unwrap();
        assert_eq!(vocab.get_vocab_size(), 9);
        assert_eq!(vocab.token_count("am"), 4);

        let capped = VocabSource::<T>::fresh(Some(5))
            .resolve(SEQUENCES)
            .unwrap();
        assert_eq!(capped.get_vocab_size(), 5);
        assert_eq!(capped.indices_from_sequence(["I", "am", "fat"]), vec![3, 4, 0]);
    }

    #[test]
    fn test_reuse_is_shared_and_untouched() {
        let mut base: Vocabulary<T> = Vocabulary::new(100);
        base.add_sequence(["hello", "world"]);
        let base = Arc::new(base);

        let source: VocabSource<T> = base.clone().into();
        assert!(!source.is_fresh());

        let vocab = source.resolve(SEQUENCES).unwrap();
        assert!(Arc::ptr_eq(&vocab, &base));
        assert_eq!(vocab.distinct_token_count(), 2);
        assert!(!vocab.contains("am"));
    }

    #[test]
    fn test_load_from_path() {
        tempdir::TempDir::new("vocab_source_test")
            .and_then(|dir| {
                let path = dir.path().join("src_vocab.txt");
                std::fs::write(&path, "hello\nhi\nhello\n")?;

                let vocab = VocabSource::<T>::from(path.as_path())
                    .resolve(SEQUENCES)
                    .unwrap();
                assert_eq!(vocab.get_vocab_size(), 5);
                assert_eq!(vocab.token_count("hello"), 2);
                assert!(!vocab.contains("am"));

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_directory_is_not_a_vocabulary() {
        tempdir::TempDir::new("vocab_source_test")
            .and_then(|dir| {
                let res = VocabSource::<T>::from(dir.path()).resolve(SEQUENCES);
                assert!(matches!(res, Err(SeqBatchError::NotAVocabulary { .. })));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_binary_file_is_not_a_vocabulary() {
        tempdir::TempDir::new("vocab_source_test")
            .and_then(|dir| {
                let path = dir.path().join("weights.bin");
                std::fs::write(&path, [0x00, 0xff, 0xfe, 0x80])?;

                let res = VocabSource::<T>::from(path).resolve(SEQUENCES);
                assert!(matches!(res, Err(SeqBatchError::NotAVocabulary { .. })));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_file() {
        let res = VocabSource::<T>::from(PathBuf::from("/nonexistent/vocab.txt")).resolve(SEQUENCES);
        assert!(matches!(res, Err(SeqBatchError::Io(_))));
    }
}
