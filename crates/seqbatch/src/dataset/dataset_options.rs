//! # Dataset Options

use std::{path::Path, sync::Arc};

use crate::{
    corpus::{CorpusOptions, TokenSplitter},
    types::TokenType,
    vocab::{VocabSource, Vocabulary},
};

/// Options for building a [`crate::dataset::Dataset`].
///
/// Each side resolves its own [`VocabSource`]; the default builds a fresh,
/// unbounded vocabulary from the retained pairs.
#[derive(Debug, Clone)]
pub struct DatasetOptions<T: TokenType = u32> {
    /// Pairs whose source has more tokens than this are dropped.
    pub max_src_len: usize,

    /// Pairs whose target has more tokens than this are dropped.
    pub max_tgt_len: usize,

    /// The source vocabulary source.
    pub src_vocab: VocabSource<T>,

    /// The target vocabulary source.
    pub tgt_vocab: VocabSource<T>,

    /// How raw records are split and tokenized.
    pub corpus: CorpusOptions,
}

impl<T: TokenType> DatasetOptions<T> {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_src_len` - the inclusive source length ceiling, in tokens.
    /// * `max_tgt_len` - the inclusive target length ceiling, in tokens.
    ///
    /// ## Returns
    /// A new `DatasetOptions` instance.
    pub fn new(
        max_src_len: usize,
        max_tgt_len: usize,
    ) -> Self {
        Self {
            max_src_len,
            max_tgt_len,
            src_vocab: VocabSource::default(),
            tgt_vocab: VocabSource::default(),
            corpus: CorpusOptions::default(),
        }
    }

    /// Sets the source vocabulary source.
    pub fn with_src_vocab_source(
        self,
        src_vocab: VocabSource<T>,
    ) -> Self {
        Self { src_vocab, ..self }
    }

    /// Reuse an existing source vocabulary.
    pub fn with_src_vocab<V: Into<Arc<Vocabulary<T>>>>(
        self,
        vocab: V,
    ) -> Self {
        self.with_src_vocab_source(VocabSource::Reuse(vocab.into()))
    }

    /// Load the source vocabulary from a saved file.
    pub fn with_src_vocab_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Self {
        self.with_src_vocab_source(path.as_ref().into())
    }

    /// Build a fresh source vocabulary capped at `max_size` indices.
    ///
    /// Replaces any previously configured source vocabulary.
    pub fn with_src_max_vocab(
        self,
        max_size: usize,
    ) -> Self {
        self.with_src_vocab_source(VocabSource::fresh(Some(max_size)))
    }

    /// Sets the target vocabulary source.
    pub fn with_tgt_vocab_source(
        self,
        tgt_vocab: VocabSource<T>,
    ) -> Self {
        Self { tgt_vocab, ..self }
    }

    /// Reuse an existing target vocabulary.
    pub fn with_tgt_vocab<V: Into<Arc<Vocabulary<T>>>>(
        self,
        vocab: V,
    ) -> Self {
        self.with_tgt_vocab_source(VocabSource::Reuse(vocab.into()))
    }

    /// Load the target vocabulary from a saved file.
    pub fn with_tgt_vocab_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Self {
        self.with_tgt_vocab_source(path.as_ref().into())
    }

    /// Build a fresh target vocabulary capped at `max_size` indices.
    ///
    /// Replaces any previously configured target vocabulary.
    pub fn with_tgt_max_vocab(
        self,
        max_size: usize,
    ) -> Self {
        self.with_tgt_vocab_source(VocabSource::fresh(Some(max_size)))
    }

    /// Sets the corpus options.
    pub fn with_corpus(
        self,
        corpus: CorpusOptions,
    ) -> Self {
        Self { corpus, ..self }
    }

    /// Sets the source/target field delimiter used by file loading.
    pub fn with_field_delimiter(
        self,
        field_delimiter: char,
    ) -> Self {
        let corpus = self.corpus.clone().with_field_delimiter(field_delimiter);
        Self { corpus, ..self }
    }

    /// Sets the token splitter.
    pub fn with_splitter(
        self,
        splitter: Arc<dyn TokenSplitter>,
    ) -> Self {
        let corpus = self.corpus.clone().with_splitter(splitter);
        Self { corpus, ..self }
    }
}
