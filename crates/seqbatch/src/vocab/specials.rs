//! # Reserved Tokens
//!
//! Every [`crate::vocab::Vocabulary`] starts with these tokens registered,
//! at these indices, independent of corpus content.

/// The mask token; stands in for unknown and capacity-excluded tokens.
pub const MASK_TOKEN: &str = "MASK";

/// The start-of-sequence token.
pub const SOS_TOKEN: &str = "SOS";

/// The end-of-sequence token.
pub const EOS_TOKEN: &str = "EOS";

/// The index of [`MASK_TOKEN`].
pub const MASK_INDEX: usize = 0;

/// The index of [`SOS_TOKEN`].
pub const SOS_INDEX: usize = 1;

/// The index of [`EOS_TOKEN`].
pub const EOS_INDEX: usize = 2;

/// The reserved tokens, in index order.
pub const RESERVED_TOKENS: [&str; 3] = [MASK_TOKEN, SOS_TOKEN, EOS_TOKEN];

/// The number of reserved index slots.
pub const RESERVED_COUNT: usize = RESERVED_TOKENS.len();
