//! # Parallel Text Dataset

use std::{path::Path, sync::Arc};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    corpus::{TokenPair, pairs_from_lists, read_pairs_path},
    dataset::{Batches, DatasetOptions},
    errors::{Result, SeqBatchError},
    types::TokenType,
    vocab::Vocabulary,
};

/// One index-encoded training example.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedPair<T: TokenType> {
    /// The encoded source sequence.
    pub source: Vec<T>,

    /// The encoded target sequence.
    pub target: Vec<T>,
}

/// Pair counts recorded while building a [`Dataset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    /// Pairs read before length filtering.
    pub total_pairs: usize,

    /// Pairs kept.
    pub retained_pairs: usize,

    /// Pairs dropped by the length ceilings.
    pub dropped_pairs: usize,
}

/// Encoded, length-filtered sequence pairs with one vocabulary per side.
///
/// Built once; afterward only [`Dataset::shuffle`] changes it.
#[derive(Debug, Clone)]
pub struct Dataset<T: TokenType = u32> {
    data: Vec<EncodedPair<T>>,
    input_vocab: Arc<Vocabulary<T>>,
    output_vocab: Arc<Vocabulary<T>>,
    max_src_len: usize,
    max_tgt_len: usize,
    stats: DatasetStats,
}

impl<T: TokenType> Dataset<T> {
    /// Build a dataset from a pair corpus file.
    ///
    /// ## Arguments
    /// * `path` - the corpus file; see [`crate::corpus::read_pairs`].
    /// * `options` - length ceilings, vocabulary sources, and corpus options.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        options: DatasetOptions<T>,
    ) -> Result<Self> {
        let pairs = read_pairs_path(path, &options.corpus)?;
        Self::from_pairs(pairs, options)
    }

    /// Build a dataset from aligned source and target text lists.
    ///
    /// ## Errors
    /// [`SeqBatchError::MisalignedPairs`] if the lists differ in length.
    pub fn from_list<S, U>(
        src_list: &[S],
        tgt_list: &[U],
        options: DatasetOptions<T>,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        U: AsRef<str>,
    {
        let pairs = pairs_from_lists(src_list, tgt_list, &options.corpus)?;
        Self::from_pairs(pairs, options)
    }

    /// Build a dataset from already tokenized pairs.
    ///
    /// Pairs over either length ceiling are dropped; then each side's
    /// vocabulary is resolved against the retained pairs, and the
    /// retained pairs are encoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(pairs, options)))]
    pub fn from_pairs(
        pairs: Vec<TokenPair>,
        options: DatasetOptions<T>,
    ) -> Result<Self> {
        let DatasetOptions {
            max_src_len,
            max_tgt_len,
            src_vocab,
            tgt_vocab,
            ..
        } = options;

        let total_pairs = pairs.len();
        let retained: Vec<TokenPair> = pairs
            .into_iter()
            .filter(|pair| pair.source.len() <= max_src_len && pair.target.len() <= max_tgt_len)
            .collect();

        let input_vocab = src_vocab.resolve(retained.iter().map(|pair| &pair.source))?;
        let output_vocab = tgt_vocab.resolve(retained.iter().map(|pair| &pair.target))?;

        let data: Vec<EncodedPair<T>> = retained
            .iter()
            .map(|pair| EncodedPair {
                source: input_vocab.indices_from_sequence(&pair.source),
                target: output_vocab.indices_from_sequence(&pair.target),
            })
            .collect();

        let stats = DatasetStats {
            total_pairs,
            retained_pairs: data.len(),
            dropped_pairs: total_pairs - data.len(),
        };
        log::info!(
            "dataset: {} pairs retained, {} dropped; vocab sizes {}/{}",
            stats.retained_pairs,
            stats.dropped_pairs,
            input_vocab.get_vocab_size(),
            output_vocab.get_vocab_size(),
        );

        Ok(Self {
            data,
            input_vocab,
            output_vocab,
            max_src_len,
            max_tgt_len,
            stats,
        })
    }

    /// The number of retained pairs.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The encoded pairs, in their current order.
    pub fn data(&self) -> &[EncodedPair<T>] {
        &self.data
    }

    /// The source vocabulary.
    pub fn input_vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.input_vocab
    }

    /// The target vocabulary.
    pub fn output_vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.output_vocab
    }

    /// The inclusive source length ceiling.
    pub fn max_src_len(&self) -> usize {
        self.max_src_len
    }

    /// The inclusive target length ceiling.
    pub fn max_tgt_len(&self) -> usize {
        self.max_tgt_len
    }

    /// Counts recorded at construction.
    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    /// The number of full batches: `len() / batch_size`.
    ///
    /// ## Errors
    /// [`SeqBatchError::InvalidBatchSize`] if `batch_size == 0`.
    pub fn num_batches(
        &self,
        batch_size: usize,
    ) -> Result<usize> {
        if batch_size == 0 {
            return Err(SeqBatchError::InvalidBatchSize);
        }
        Ok(self.len() / batch_size)
    }

    /// Iterate over batches of the current order.
    ///
    /// Each call is a fresh pass; see [`Batches`].
    ///
    /// ## Errors
    /// * [`SeqBatchError::BatchOverflow`] if `batch_size > len()`.
    /// * [`SeqBatchError::InvalidBatchSize`] if `batch_size == 0`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn make_batches(
        &self,
        batch_size: usize,
    ) -> Result<Batches<'_, T>> {
        Batches::new(&self.data, batch_size)
    }

    /// Permute the pairs in place, uniformly.
    ///
    /// With `Some(seed)`, a dedicated [`StdRng`] is seeded for this call;
    /// so the same seed applied to the same order yields the same order.
    /// With `None`, the thread-local generator is used.
    pub fn shuffle(
        &mut self,
        seed: Option<u64>,
    ) {
        match seed {
            Some(seed) => self.data.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => self.data.shuffle(&mut rand::rng()),
        }
    }
}
