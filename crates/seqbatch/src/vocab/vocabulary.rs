//! # Bounded Token Vocabulary

use core::fmt;
use std::path::Path;

use crate::{
    errors::{Result, SeqBatchError},
    types::{SBHashMap, TokenType, hash_map_new, index_capacity},
    vocab::{
        io::{load_vocab_path, save_vocab_path},
        specials::{RESERVED_COUNT, RESERVED_TOKENS},
    },
};

/// A capacity-bounded `{ token <-> index }` table with occurrence counts.
///
/// Indices `0..3` are always `MASK`, `SOS`, `EOS`; see [`crate::vocab::specials`].
///
/// Indices are handed out first-come-first-served over the arrival order
/// of distinct tokens, until `max_size` indices exist. Tokens which arrive
/// after that are still counted, but never receive an index; there is no
/// re-ranking by frequency.
///
/// Two vocabularies are equal when they have counted the same token multiset,
/// regardless of which indices they assigned.
///
/// ## Parameters
/// * `T` - the index type; see [`TokenType`].
#[derive(Debug, Clone)]
pub struct Vocabulary<T: TokenType = u32> {
    max_size: usize,
    token_to_index: SBHashMap<String, T>,
    index_to_token: Vec<String>,
    token_to_count: SBHashMap<String, usize>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Create a new vocabulary holding only the reserved tokens.
    ///
    /// ## Arguments
    /// * `max_size` - the maximum number of indices, reserved tokens included.
    ///   Raised to the reserved count, and lowered to what `T` can represent.
    ///
    /// ## Returns
    /// A new `Vocabulary` with `get_vocab_size() == 3`.
    pub fn new(max_size: usize) -> Self {
        let mut vocab = Self {
            max_size: max_size.clamp(RESERVED_COUNT, index_capacity::<T>()),
            token_to_index: hash_map_new(),
            index_to_token: Vec::new(),
            token_to_count: hash_map_new(),
        };
        for token in RESERVED_TOKENS {
            vocab.assign_index(token);
        }
        vocab
    }

    /// Create a new vocabulary with no practical capacity limit.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Load a vocabulary saved by [`Self::save`].
    ///
    /// The loaded vocabulary is unbounded, so every token in the file is indexed.
    /// It compares equal to the saved vocabulary; index numbering may differ.
    ///
    /// ## Errors
    /// [`SeqBatchError::VocabOverflow`] if `T` cannot index every distinct token.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_vocab_path(path)
    }

    /// Save the counted token multiset; one line per occurrence.
    ///
    /// ## Errors
    /// [`SeqBatchError::UnsavableToken`] if a counted token contains `\n`.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<()> {
        save_vocab_path(self, path)
    }

    /// The maximum number of indices this vocabulary will assign.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The number of assigned indices; reserved and promoted tokens.
    pub fn get_vocab_size(&self) -> usize {
        self.index_to_token.len()
    }

    /// Has the vocabulary run out of index slots?
    pub fn is_full(&self) -> bool {
        self.get_vocab_size() >= self.max_size
    }

    /// Count one occurrence of `token`, assigning it an index if it is new and there is room.
    pub fn add_token<S: AsRef<str>>(
        &mut self,
        token: S,
    ) {
        let token = token.as_ref();
        match self.token_to_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_to_count.insert(token.to_string(), 1);
            }
        }

        if !self.token_to_index.contains_key(token) {
            self.assign_index(token);
        }
    }

    /// Add every token of `sequence`, in order.
    pub fn add_sequence<I>(
        &mut self,
        sequence: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in sequence {
            self.add_token(token);
        }
    }

    fn assign_index(
        &mut self,
        token: &str,
    ) -> Option<T> {
        if self.is_full() {
            return None;
        }
        let index = T::from_usize(self.index_to_token.len())?;
        self.token_to_index.insert(token.to_string(), index);
        self.index_to_token.push(token.to_string());
        Some(index)
    }

    /// Does `token` have an index?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_index.contains_key(token)
    }

    /// Return the index for `token`, if it has one.
    pub fn lookup_index(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_index.get(token).copied()
    }

    /// Return the index for `token`.
    ///
    /// ## Errors
    /// [`SeqBatchError::UnknownToken`] if the token was never added,
    /// or was added after the vocabulary was full.
    pub fn get_index(
        &self,
        token: &str,
    ) -> Result<T> {
        self.lookup_index(token)
            .ok_or_else(|| SeqBatchError::UnknownToken {
                token: token.to_string(),
            })
    }

    /// Return the token for `index`, if it is assigned.
    pub fn lookup_token(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|idx| self.index_to_token.get(idx))
            .map(String::as_str)
    }

    /// Return the token for `index`.
    ///
    /// ## Errors
    /// [`SeqBatchError::UnknownIndex`] if the index is not assigned.
    pub fn get_token(
        &self,
        index: T,
    ) -> Result<&str> {
        self.lookup_token(index)
            .ok_or_else(|| SeqBatchError::UnknownIndex {
                index: index.to_u64().unwrap_or(u64::MAX),
            })
    }

    /// Encode a token sequence; tokens without an index encode as `MASK` (0).
    pub fn indices_from_sequence<I>(
        &self,
        sequence: I,
    ) -> Vec<T>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        // MASK_INDEX
        let mask = T::zero();
        sequence
            .into_iter()
            .map(|token| self.lookup_index(token.as_ref()).unwrap_or(mask))
            .collect()
    }

    /// Decode an index sequence.
    ///
    /// ## Errors
    /// [`SeqBatchError::UnknownIndex`] on the first unassigned index.
    pub fn sequence_from_indices<I>(
        &self,
        indices: I,
    ) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
    {
        indices
            .into_iter()
            .map(|index| self.get_token(index).map(str::to_string))
            .collect()
    }

    /// The number of times `token` has been added; 0 if never seen.
    pub fn token_count(
        &self,
        token: &str,
    ) -> usize {
        self.token_to_count.get(token).copied().unwrap_or_default()
    }

    /// The number of distinct tokens ever added, indexed or not.
    pub fn distinct_token_count(&self) -> usize {
        self.token_to_count.len()
    }

    /// The number of distinct added tokens which never received an index.
    pub fn unindexed_token_count(&self) -> usize {
        self.token_to_count
            .keys()
            .filter(|token| !self.token_to_index.contains_key(token.as_str()))
            .count()
    }

    /// The total number of token occurrences added.
    pub fn total_token_count(&self) -> usize {
        self.token_to_count.values().sum()
    }

    /// Iterate over `(index, token)` in index order.
    pub fn tokens(&self) -> impl Iterator<Item = (T, &str)> {
        self.index_to_token
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| T::from_usize(idx).map(|index| (index, token.as_str())))
    }

    /// Iterate over `(token, count)` in no particular order.
    pub fn token_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.token_to_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
    }
}

impl<T: TokenType> PartialEq for Vocabulary<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.token_to_count == other.token_to_count
    }
}

impl<T: TokenType> Eq for Vocabulary<T> {}

impl<T: TokenType> fmt::Display for Vocabulary<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "Vocabulary(size={}, max_size={}, distinct={})",
            self.get_vocab_size(),
            self.max_size,
            self.distinct_token_count()
        )
    }
}

impl<T: TokenType, S: AsRef<str>> Extend<S> for Vocabulary<T> {
    fn extend<I: IntoIterator<Item = S>>(
        &mut self,
        iter: I,
    ) {
        self.add_sequence(iter);
    }
}

impl<T: TokenType, S: AsRef<str>> FromIterator<S> for Vocabulary<T> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Self::unbounded();
        vocab.add_sequence(iter);
        vocab
    }
}
