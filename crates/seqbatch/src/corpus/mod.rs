//! # Pair Corpora
//!
//! Turns raw aligned text into tokenized [`TokenPair`]s.
//!
//! Tokenization is pluggable through [`TokenSplitter`]:
//! * [`WhitespaceSplitter`] - the default.
//! * [`RegexSplitter`] - every regex match is a token.
mod pair_reader;
mod token_splitter;

#[doc(inline)]
pub use pair_reader::*;
#[doc(inline)]
pub use token_splitter::*;
