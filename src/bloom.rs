// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter sized from a key count, a hash count and a target false positive rate.

use std::hash::Hash;
use std::marker::PhantomData;

use log::{debug, warn};

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::{self, ChainHasher, SipChainHasher};

/// The default number of hash draws per key.
pub const DEFAULT_HASHES: usize = 4;

/// The default false positive probability value, 5%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.05;

/// A Bloom filter that keeps track of items of type `K`.
#[derive(Debug)]
pub struct BloomFilter<K: ?Sized, H = SipChainHasher> {
    bits: BitVec,
    /// Number of `1` bits in `bits`, maintained on every insert.
    nbits_set: usize,
    nkeys: usize,
    nhashes: usize,
    fp_rate: f64,
    hasher: H,
    key: PhantomData<fn(&K)>,
}

impl<K: Hash + ?Sized> BloomFilter<K> {
    /// Return a new Bloom filter sized to hold `target_keys` keys with `hashes` hash
    /// draws per key, at a false positive rate of at most `fp_rate`.
    ///
    /// Fails with [`Error::InvalidParameter`] if `target_keys` or `hashes` is zero,
    /// if `fp_rate` is not strictly between `0` and `1`, or if the inputs size the
    /// filter to less than one bit.
    pub fn new(target_keys: usize, hashes: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hasher(target_keys, hashes, fp_rate, SipChainHasher::default())
    }

    /// Return a new Bloom filter for `target_keys` keys, using [`DEFAULT_HASHES`] and
    /// [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn with_capacity(target_keys: usize) -> Result<Self> {
        Self::new(target_keys, DEFAULT_HASHES, DEFAULT_FALSE_POSITIVE_RATE)
    }
}

impl<K: Hash + ?Sized, H: ChainHasher> BloomFilter<K, H> {
    /// Like [`BloomFilter::new`], hashing keys with the given hasher.
    pub fn with_hasher(
        target_keys: usize,
        hashes: usize,
        fp_rate: f64,
        hasher: H,
    ) -> Result<Self> {
        let nbits = bits_needed(target_keys, hashes, fp_rate)?;

        debug!(
            "bloom: sized for {} keys, {} hashes, rate {}: {} bits ({:.2} bits/key)",
            target_keys,
            hashes,
            fp_rate,
            nbits,
            nbits as f64 / target_keys as f64,
        );

        Ok(BloomFilter {
            bits: BitVec::new(nbits),
            nbits_set: 0,
            nkeys: target_keys,
            nhashes: hashes,
            fp_rate,
            hasher,
            key: PhantomData,
        })
    }

    /// Insert a key. Inserting always succeeds, and inserting the same key again
    /// leaves the filter unchanged.
    pub fn insert(&mut self, key: &K) {
        let nbits = self.bits.len() as u64;

        for h in hash::chain(&self.hasher, key).take(self.nhashes) {
            if self.bits.set((h % nbits) as usize) {
                self.nbits_set += 1;
            }
        }
        debug_assert!(self.nbits_set <= self.bits.len());
    }

    /// Return `false` if the key was definitely never inserted, and `true` if it
    /// probably was. Stops probing at the first unset bit.
    pub fn find(&self, key: &K) -> bool {
        let nbits = self.bits.len() as u64;

        hash::chain(&self.hasher, key)
            .take(self.nhashes)
            .all(|h| self.bits.is_set((h % nbits) as usize))
    }
}

impl<K: ?Sized, H> BloomFilter<K, H> {
    /// The projected false positive rate given the bits currently set.
    ///
    /// This is an estimate from occupancy, not a measurement, and holds whether or
    /// not the number of inserted keys matches the one the filter was sized for.
    pub fn false_positive_rate(&self) -> f64 {
        let nbits = self.bits.len() as f64;
        let phi = (nbits - self.nbits_set as f64) / nbits;

        (1. - phi).powf(self.nhashes as f64)
    }

    /// Number of bits currently set. Constant time.
    pub fn set_bit_count(&self) -> usize {
        self.nbits_set
    }

    /// Estimate how many distinct keys were inserted. Returns `None` once every bit
    /// is set, since the estimate is then unbounded.
    pub fn approx_count(&self) -> Option<usize> {
        if self.nbits_set == self.bits.len() {
            return None;
        }
        let nbits = self.bits.len() as f64;
        let nbits_set = self.nbits_set as f64;
        let nhashes = self.nhashes as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        Some(count.round() as usize)
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash draws per key (`d`).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Number of keys the filter was sized for (`n`).
    pub fn target_keys(&self) -> usize {
        self.nkeys
    }

    /// False positive rate the filter was sized for (`P`).
    pub fn target_rate(&self) -> f64 {
        self.fp_rate
    }
}

impl<K: ?Sized, H: Clone> Clone for BloomFilter<K, H> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            nbits_set: self.nbits_set,
            nkeys: self.nkeys,
            nhashes: self.nhashes,
            fp_rate: self.fp_rate,
            hasher: self.hasher.clone(),
            key: PhantomData,
        }
    }
}

/// Return the bit vector length for a filter holding `target_keys` keys, using
/// `hashes` hash draws per key, with a false positive rate of `fp_rate`.
///
/// With `n` keys, `d` hashes and rate `P`, the fraction of bits left unset that
/// yields `P` is `phi = 1 - P^(1/d)`, and the length giving that fraction after
/// `n` insertions is `N = d / (1 - phi^(1/n))`. The result is `N` truncated, minus one.
pub fn bits_needed(target_keys: usize, hashes: usize, fp_rate: f64) -> Result<usize> {
    if target_keys == 0 {
        return Err(Error::invalid("target_keys", target_keys, "greater than 0"));
    }
    if hashes == 0 {
        return Err(Error::invalid("hashes", hashes, "at least 1"));
    }
    if !(fp_rate > 0. && fp_rate < 1.) {
        return Err(Error::invalid("fp_rate", fp_rate, "strictly between 0 and 1"));
    }
    let n = target_keys as f64;
    let d = hashes as f64;

    let phi = 1. - fp_rate.powf(1. / d);
    let nbits = (d / (1. - phi.powf(1. / n)) - 1.).trunc();

    if !nbits.is_finite() || nbits < 1. || nbits >= usize::MAX as f64 {
        warn!(
            "bloom: {} keys, {} hashes and rate {} give a degenerate length of {} bits",
            target_keys, hashes, fp_rate, nbits
        );
        return Err(Error::invalid("bits", nbits, "a bit array length of at least 1"));
    }
    Ok(nbits as usize)
}
