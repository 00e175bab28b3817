//! # `seqbatch` Parallel Text Batching
//!
//! Bounded vocabularies and exact-division batching for
//! sequence-to-sequence training data.
//!
//! See:
//! * [`vocab`] to build, persist, and compare token vocabularies.
//! * [`corpus`] to read and tokenize aligned text pairs.
//! * [`dataset`] to encode, filter, shuffle, and batch pairs.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all ``HashMap`` implementations for ``foldhash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::SBHash{*}`` type alias machinery.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Building A Dataset
//!
//! ```rust
//! use seqbatch::dataset::{Dataset, DatasetOptions};
//!
//! let src = ["I am fat", "I am busy", "I am calm", "I am cold"];
//! let tgt = ["Je suis gras", "Je suis occupe", "Je suis calme", "J`ai froid"];
//!
//! let ds: Dataset = Dataset::from_list(&src, &tgt, DatasetOptions::new(10, 10)).unwrap();
//! assert_eq!(ds.input_vocab().get_vocab_size(), 9);
//!
//! let sizes: Vec<usize> = ds.make_batches(3).unwrap().map(|b| b.len()).collect();
//! assert_eq!(sizes, vec![3, 1]);
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod dataset;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use dataset::{Batch, Batches, Dataset, DatasetOptions};
#[doc(inline)]
pub use errors::{Result, SeqBatchError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabSource, Vocabulary};
