//! # Pair Corpus Reader
//!
//! Lines are:
//! ```terminaloutput
//! {SOURCE TEXT}<delimiter>{TARGET TEXT}
//! ```
//! Only the first delimiter splits; blank lines are skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use crate::{
    corpus::{TokenSplitter, WhitespaceSplitter},
    errors::{Result, SeqBatchError},
};

/// The default source/target field delimiter.
pub const DEFAULT_FIELD_DELIMITER: char = '\t';

/// One tokenized, aligned training example.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    /// The source tokens.
    pub source: Vec<String>,

    /// The target tokens.
    pub target: Vec<String>,
}

/// Options for reading pair corpora.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// The character separating source and target text on a line.
    pub field_delimiter: char,

    /// The tokenizer applied to each side.
    pub splitter: Arc<dyn TokenSplitter>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            field_delimiter: DEFAULT_FIELD_DELIMITER,
            splitter: Arc::new(WhitespaceSplitter),
        }
    }
}

impl CorpusOptions {
    /// Sets the field delimiter.
    pub fn with_field_delimiter(
        self,
        field_delimiter: char,
    ) -> Self {
        Self {
            field_delimiter,
            ..self
        }
    }

    /// Sets the token splitter.
    pub fn with_splitter(
        self,
        splitter: Arc<dyn TokenSplitter>,
    ) -> Self {
        Self { splitter, ..self }
    }

    /// Tokenize a source/target text pair.
    pub fn tokenize_pair(
        &self,
        source: &str,
        target: &str,
    ) -> TokenPair {
        TokenPair {
            source: self.splitter.split_tokens(source),
            target: self.splitter.split_tokens(target),
        }
    }
}

/// Load tokenized pairs from a corpus file.
///
/// # Arguments
/// * `path` - the path to the corpus file.
/// * `options` - the corpus options.
pub fn read_pairs_path<P: AsRef<Path>>(
    path: P,
    options: &CorpusOptions,
) -> Result<Vec<TokenPair>> {
    let path = path.as_ref();
    log::debug!("reading corpus: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_pairs(reader, options)
}

/// Read tokenized pairs from a corpus line reader.
///
/// ## Errors
/// [`SeqBatchError::Parse`] for a non-blank line without the field delimiter.
pub fn read_pairs<R: BufRead>(
    reader: R,
    options: &CorpusOptions,
) -> Result<Vec<TokenPair>> {
    let mut pairs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        let (source, target) = line
            .split_once(options.field_delimiter)
            .ok_or_else(|| SeqBatchError::Parse {
                line: idx + 1,
                message: format!("missing field delimiter {:?}", options.field_delimiter),
            })?;

        pairs.push(options.tokenize_pair(source, target));
    }

    Ok(pairs)
}

/// Tokenize aligned in-memory source and target lists.
///
/// ## Errors
/// [`SeqBatchError::MisalignedPairs`] if the lists differ in length.
pub fn pairs_from_lists<S, U>(
    src_list: &[S],
    tgt_list: &[U],
    options: &CorpusOptions,
) -> Result<Vec<TokenPair>>
where
    S: AsRef<str>,
    U: AsRef<str>,
{
    if src_list.len() != tgt_list.len() {
        return Err(SeqBatchError::MisalignedPairs {
            sources: src_list.len(),
            targets: tgt_list.len(),
        });
    }

    Ok(src_list
        .iter()
        .zip(tgt_list)
        .map(|(src, tgt)| options.tokenize_pair(src.as_ref(), tgt.as_ref()))
        .collect())
}
