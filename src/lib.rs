//! A Bloom filter sized from the number of keys it will hold, the number of hash
//! functions to use, and the false positive rate it should not exceed.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! # Sizing
//!
//! Given `n` expected keys, `d` hash draws per key and a target false positive
//! rate `P`, the fraction of bits that must remain zero is
//! phi = 1 - P<sup>1/d</sup>, and the bit vector length is
//! N = d / (1 - phi<sup>1/n</sup>), truncated, minus one. See [`bloom::bits_needed`].
//!
//! # Hash Chaining
//!
//! The `d` positions for a key come from a single keyed hash function applied
//! repeatedly: the first draw is seeded with zero, and each following draw is
//! seeded with the raw output of the previous one. Only then is each draw reduced
//! modulo the bit vector length. See [`hash::chain`].
//!
//! # Example
//!
//! ```
//! use chainbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::<str>::new(1000, 4, 0.05).unwrap();
//!
//! filter.insert("foo");
//! filter.insert("bar");
//!
//! assert!(filter.find("foo"));
//! assert!(filter.find("bar"));
//! filter.find("baz"); // almost certainly false
//!
//! filter.set_bit_count(); // at most 8
//! filter.false_positive_rate(); // tiny, the filter is nearly empty
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;

pub use bloom::BloomFilter;
pub use error::{Error, Result};
pub use hash::{ChainHasher, SipChainHasher};
