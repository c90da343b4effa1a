// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Keyed hashing, and the chaining used to derive several draws from one hash function.
use std::hash::{Hash, Hasher};
use std::iter;

use siphasher::sip::SipHasher13;

/// Salt used as the second half of the SipHash key by [`SipChainHasher::default`].
pub const DEFAULT_SALT: u64 = 0x9d3a_c41b_27f0_e856;

/// A hash function over keys of any hashable type, parameterised by a 64-bit seed.
///
/// Implementations must be deterministic: the same key and seed always produce the
/// same output. Calls seeded with a previous output should behave as independent
/// draws, since that is how [`chain`] derives multiple hash functions from one.
pub trait ChainHasher {
    /// Hash `key` under the given seed.
    fn hash_with_seed<K: Hash + ?Sized>(&self, key: &K, seed: u64) -> u64;
}

/// SipHash-1-3 keyed with `(seed, salt)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SipChainHasher {
    salt: u64,
}

impl SipChainHasher {
    /// Create a hasher with a custom salt. Filters using different salts hash the
    /// same key to unrelated positions.
    pub fn with_salt(salt: u64) -> Self {
        Self { salt }
    }

    /// The salt this hasher was created with.
    pub fn salt(&self) -> u64 {
        self.salt
    }
}

impl Default for SipChainHasher {
    fn default() -> Self {
        Self::with_salt(DEFAULT_SALT)
    }
}

impl ChainHasher for SipChainHasher {
    fn hash_with_seed<K: Hash + ?Sized>(&self, key: &K, seed: u64) -> u64 {
        let mut sip = SipHasher13::new_with_keys(seed, self.salt);
        key.hash(&mut sip);
        sip.finish()
    }
}

/// Return the endless sequence of raw hash draws for a key.
///
/// The first draw is seeded with `0`; every following draw is seeded with the raw
/// output of the one before it. Outputs are not reduced, so the sequence does not
/// depend on the size of any bit array it is later used to index.
pub fn chain<'a, H, K>(hasher: &'a H, key: &'a K) -> impl Iterator<Item = u64> + 'a
where
    H: ChainHasher,
    K: Hash + ?Sized,
{
    iter::successors(Some(hasher.hash_with_seed(key, 0)), move |prev| {
        Some(hasher.hash_with_seed(key, *prev))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let hasher = SipChainHasher::default();

        assert_eq!(
            hasher.hash_with_seed("apple", 7),
            hasher.hash_with_seed("apple", 7)
        );
        assert_ne!(
            hasher.hash_with_seed("apple", 7),
            hasher.hash_with_seed("apple", 8)
        );
        assert_ne!(
            hasher.hash_with_seed("apple", 7),
            hasher.hash_with_seed("apples", 7)
        );
    }

    #[test]
    fn test_salt() {
        let a = SipChainHasher::default();
        let b = SipChainHasher::with_salt(1);

        assert_eq!(a.salt(), DEFAULT_SALT);
        assert_ne!(a.hash_with_seed(&42u32, 0), b.hash_with_seed(&42u32, 0));
    }

    #[test]
    fn test_chain_seeds_with_previous_output() {
        let hasher = SipChainHasher::default();
        let draws: Vec<u64> = chain(&hasher, "banana").take(4).collect();

        assert_eq!(draws[0], hasher.hash_with_seed("banana", 0));
        for pair in draws.windows(2) {
            assert_eq!(pair[1], hasher.hash_with_seed("banana", pair[0]));
        }
    }

    #[test]
    fn test_chain_is_repeatable() {
        let hasher = SipChainHasher::default();
        let a: Vec<u64> = chain(&hasher, &1234u64).take(8).collect();
        let b: Vec<u64> = chain(&hasher, &1234u64).take(8).collect();

        assert_eq!(a, b);
    }
}
