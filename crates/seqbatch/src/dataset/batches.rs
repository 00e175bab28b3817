//! # Batch Iteration

use core::{iter::FusedIterator, slice::Chunks};

use crate::{
    dataset::EncodedPair,
    errors::{Result, SeqBatchError},
    types::TokenType,
};

/// A contiguous group of encoded pairs, split by side.
///
/// `source[i]` and `target[i]` are the two halves of the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<'a, T: TokenType> {
    /// The source sequences.
    pub source: Vec<&'a [T]>,

    /// The target sequences.
    pub target: Vec<&'a [T]>,
}

impl<'a, T: TokenType> Batch<'a, T> {
    /// Split a run of pairs into a batch.
    pub fn from_pairs(pairs: &'a [EncodedPair<T>]) -> Self {
        let (source, target) = pairs
            .iter()
            .map(|pair| (pair.source.as_slice(), pair.target.as_slice()))
            .unzip();
        Self { source, target }
    }

    /// The number of pairs in the batch.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release the `(source, target)` halves.
    pub fn into_parts(self) -> (Vec<&'a [T]>, Vec<&'a [T]>) {
        (self.source, self.target)
    }
}

/// A one-shot iterator of [`Batch`]es over a borrowed pair slice.
///
/// Every batch has `batch_size` pairs, except the last,
/// which holds the remainder.
#[derive(Debug, Clone)]
pub struct Batches<'a, T: TokenType> {
    chunks: Chunks<'a, EncodedPair<T>>,
}

impl<'a, T: TokenType> Batches<'a, T> {
    /// Create a batch iterator.
    ///
    /// ## Errors
    /// * [`SeqBatchError::InvalidBatchSize`] if `batch_size == 0`.
    /// * [`SeqBatchError::BatchOverflow`] if `batch_size > pairs.len()`.
    pub fn new(
        pairs: &'a [EncodedPair<T>],
        batch_size: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(SeqBatchError::InvalidBatchSize);
        }
        if batch_size > pairs.len() {
            return Err(SeqBatchError::BatchOverflow {
                batch_size,
                len: pairs.len(),
            });
        }
        Ok(Self {
            chunks: pairs.chunks(batch_size),
        })
    }
}

impl<'a, T: TokenType> Iterator for Batches<'a, T> {
    type Item = Batch<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Batch::from_pairs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T: TokenType> ExactSizeIterator for Batches<'_, T> {}

impl<T: TokenType> FusedIterator for Batches<'_, T> {}
