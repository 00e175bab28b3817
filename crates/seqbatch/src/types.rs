//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary index.
///
/// These are constrained to be unsigned primitive integers;
/// a [`crate::vocab::Vocabulary`] never assigns more indices than `T` can hold.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// The number of distinct indices representable by `T`, saturating at `usize::MAX`.
pub fn index_capacity<T: TokenType>() -> usize {
    T::max_value()
        .to_usize()
        .map(|max| max.saturating_add(1))
        .unwrap_or(usize::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type SBHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SBHashMap<K, V> {
            foldhash::HashMapExt::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type SBHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SBHashMap<K, V> {
            SBHashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_hash_map_new() {
        let mut counts: SBHashMap<String, usize> = hash_map_new();
        assert!(counts.is_empty());

        *counts.entry("a".to_string()).or_default() += 2;
        assert_eq!(counts.get("a"), Some(&2));
    }

    #[test]
    fn test_index_capacity() {
        assert_eq!(index_capacity::<u8>(), 256);
        assert_eq!(index_capacity::<u16>(), 65_536);
        assert_eq!(index_capacity::<usize>(), usize::MAX);
    }
}
