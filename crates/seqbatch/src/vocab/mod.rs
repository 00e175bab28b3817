//! # Vocabulary
//!
//! This module provides the bounded [`Vocabulary`] and its io mechanisms.
//!
//! ## Reserved Tokens
//!
//! Every vocabulary reserves the first three indices:
//! * `MASK` - `0`; unknown and capacity-excluded tokens encode to this.
//! * `SOS` - `1`.
//! * `EOS` - `2`.
//!
//! See [`specials`].
//!
//! ## Persistence
//!
//! Vocabularies are saved as the multiset of tokens they counted,
//! one token per line per occurrence. See [`io`].
//!
//! ## Dataset Sources
//!
//! [`VocabSource`] selects between reusing, loading, or building a
//! vocabulary for one side of a [`crate::dataset::Dataset`].
pub mod io;
pub mod specials;
pub mod vocab_source;
pub mod vocabulary;

#[doc(inline)]
pub use vocab_source::VocabSource;
#[doc(inline)]
pub use vocabulary::Vocabulary;
