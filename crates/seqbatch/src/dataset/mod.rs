//! # Datasets
//!
//! A [`Dataset`] holds index-encoded, length-filtered sequence pairs,
//! plus the source and target [`crate::vocab::Vocabulary`] used to encode them.
//!
//! ```rust,no_run
//! use seqbatch::dataset::{Dataset, DatasetOptions};
//!
//! fn example() -> seqbatch::errors::Result<()> {
//!     let train: Dataset = Dataset::from_file(
//!         "eng-fra.txt",
//!         DatasetOptions::new(10, 10)
//!             .with_src_max_vocab(50000)
//!             .with_tgt_max_vocab(50000),
//!     )?;
//!
//!     // The dev set is encoded against the training vocabularies.
//!     let mut dev: Dataset = Dataset::from_file(
//!         "eng-fra-dev.txt",
//!         DatasetOptions::new(10, 10)
//!             .with_src_vocab(train.input_vocab().clone())
//!             .with_tgt_vocab(train.output_vocab().clone()),
//!     )?;
//!
//!     dev.shuffle(Some(123));
//!     for batch in dev.make_batches(4)? {
//!         let (source, target) = batch.into_parts();
//!         assert_eq!(source.len(), target.len());
//!     }
//!     Ok(())
//! }
//! ```
mod batches;
mod dataset_options;
mod pair_dataset;

#[doc(inline)]
pub use batches::{Batch, Batches};
#[doc(inline)]
pub use dataset_options::DatasetOptions;
#[doc(inline)]
pub use pair_dataset::{Dataset, DatasetStats, EncodedPair};
