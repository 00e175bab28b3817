//! # Vocabulary IO
//!
//! A saved vocabulary is the multiset of tokens it has counted;
//! not its index table.
//!
//! Lines are:
//! ```terminaloutput
//! {TOKEN}
//! ```
//! with each token repeated once per counted occurrence.
//!
//! Reading re-adds every line to an unbounded [`Vocabulary`], so every
//! distinct token in the file receives an index, or the read fails.
//! The format is lossless for any token without a `\n`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{Result, SeqBatchError},
    types::TokenType,
    vocab::Vocabulary,
};

/// Load a [`Vocabulary`] from a token multiset file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(path)))]
pub fn load_vocab_path<T, P>(path: P) -> Result<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading vocabulary: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader)
}

/// Read a [`Vocabulary`] from a token multiset line reader.
///
/// Every `\n`-terminated line is one token, kept byte for byte;
/// blank lines are empty tokens.
///
/// ## Errors
/// * [`SeqBatchError::VocabOverflow`] if `T` cannot index every distinct token.
/// * [`SeqBatchError::Io`] with [`io::ErrorKind::InvalidData`] for non-UTF-8 lines.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab<T, R>(reader: R) -> Result<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = Vocabulary::unbounded();

    for line in reader.split(b'\n') {
        let token =
            String::from_utf8(line?).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        vocab.add_token(token);
    }

    let unindexed = vocab.unindexed_token_count();
    if unindexed > 0 {
        return Err(SeqBatchError::VocabOverflow {
            unindexed,
            capacity: vocab.max_size(),
        });
    }

    Ok(vocab)
}

/// Save a [`Vocabulary`] to a token multiset file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab, path)))]
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &Vocabulary<T>,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving vocabulary: {}", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
///
/// Tokens are written by descending count, then by token;
/// so equal vocabularies produce identical files.
///
/// ## Errors
/// [`SeqBatchError::UnsavableToken`] if a counted token contains `\n`;
/// nothing is written in that case.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> Result<()>
where
    T: TokenType,
    W: Write,
{
    let mut items: Vec<(&str, usize)> = vocab.token_counts().collect();
    if let Some((token, _)) = items.iter().find(|(token, _)| token.contains('\n')) {
        return Err(SeqBatchError::UnsavableToken {
            token: token.to_string(),
        });
    }
    items.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));

    for (token, count) in items {
        for _ in 0..count {
            writeln!(writer, "{token}")?;
        }
    }

    Ok(())
}
