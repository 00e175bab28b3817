//! # Error Types

use std::path::PathBuf;

/// Errors from seqbatch operations.
#[derive(Debug, thiserror::Error)]
pub enum SeqBatchError {
    /// The token has no assigned index.
    ///
    /// Either it was never added, or it arrived after the vocabulary was full.
    #[error("unknown token: {token:?}")]
    UnknownToken {
        /// The token that was looked up.
        token: String,
    },

    /// The index has no assigned token.
    #[error("unknown index: {index}")]
    UnknownIndex {
        /// The index that was looked up.
        index: u64,
    },

    /// A vocabulary source does not provide a usable vocabulary.
    #[error("not a vocabulary ({path:?}): {reason}")]
    NotAVocabulary {
        /// The offending path.
        path: PathBuf,
        /// Why the source was rejected.
        reason: String,
    },

    /// The requested batch size is larger than the dataset.
    #[error("batch size ({batch_size}) exceeds dataset size ({len})")]
    BatchOverflow {
        /// The requested batch size.
        batch_size: usize,
        /// The number of pairs in the dataset.
        len: usize,
    },

    /// Batch sizes must be positive.
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    /// Source and target lists have different lengths.
    #[error("misaligned pairs: {sources} source sequences vs {targets} target sequences")]
    MisalignedPairs {
        /// The number of source sequences.
        sources: usize,
        /// The number of target sequences.
        targets: usize,
    },

    /// A corpus record could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A token cannot be stored as one line of a vocabulary file.
    #[error("token cannot be saved on one line: {token:?}")]
    UnsavableToken {
        /// The offending token.
        token: String,
    },

    /// A vocabulary file holds more distinct tokens than the index type can number.
    #[error("vocabulary overflow: {unindexed} tokens beyond {capacity} indices")]
    VocabOverflow {
        /// The number of distinct tokens left without an index.
        unindexed: usize,
        /// The number of indices the index type can hold.
        capacity: usize,
    },

    /// A token splitting pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for seqbatch operations.
pub type Result<T> = core::result::Result<T, SeqBatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SeqBatchError::UnknownToken {
                token: "python".to_string()
            }
            .to_string(),
            "unknown token: \"python\""
        );
        assert_eq!(
            SeqBatchError::BatchOverflow {
                batch_size: 180,
                len: 100
            }
            .to_string(),
            "batch size (180) exceeds dataset size (100)"
        );

        assert_eq!(
            SeqBatchError::UnsavableToken {
                token: "a\nb".to_string()
            }
            .to_string(),
            "token cannot be saved on one line: \"a\\nb\""
        );

        let io: SeqBatchError = std::io::Error::other("boom").into();
        assert!(matches!(io, SeqBatchError::Io(_)));
        assert_eq!(io.to_string(), "boom");
    }
}
