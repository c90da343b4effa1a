// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

/// A packed, fixed-length bit vector whose bits can only be set, never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new zeroed bit vector of the given length, in bits.
    pub fn new(nbits: usize) -> Self {
        Self {
            nbits,
            bytes: vec![0; nbits.div_ceil(8)],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. Returns `true` if the bit was previously `0`.
    pub fn set(&mut self, index: usize) -> bool {
        let (byte_index, mask) = self.locate(index);
        let was_set = self.bytes[byte_index] & mask == mask;

        self.bytes[byte_index] |= mask;

        !was_set
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        let (byte_index, mask) = self.locate(index);

        self.bytes[byte_index] & mask == mask
    }

    /// Count the number of `1` bits. This scans the whole vector.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits. This scans the whole vector.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    fn locate(&self, index: usize) -> (usize, u8) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        (index / 8, 0x01 << (index % 8))
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_length() {
        let bitvec = BitVec::new(1);
        assert_eq!(1, bitvec.len());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(8);
        assert_eq!(8, bitvec.len());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(9);
        assert_eq!(9, bitvec.len());
        assert_eq!(2, bitvec.bytes.len());
        assert!(!bitvec.is_empty());
    }

    #[test]
    fn set_reports_transition() {
        let mut bitvec = BitVec::new(10);

        assert_eq!(true, bitvec.set(9));
        assert_eq!(false, bitvec.set(9));
        assert_eq!(true, bitvec.is_set(9));
        assert_eq!(1, bitvec.count_ones());
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(9);
        bitvec.set(8);
        for i in 0..8 {
            assert_eq!(false, bitvec.is_set(i));
        }
        assert_eq!(true, bitvec.is_set(8));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        BitVec::new(5).set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        BitVec::new(12).is_set(12);
    }

    #[test]
    fn set_each_bit_one_by_one() {
        let mut bitvec = BitVec::new(9);
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(9, bitvec.count_zeros());

        for i in 0..9 {
            assert_eq!(true, bitvec.set(i));
            assert_eq!(i + 1, bitvec.count_ones());
            assert_eq!(8 - i, bitvec.count_zeros());
        }
    }

    #[test]
    fn debug_format() {
        let mut bitvec = BitVec::new(4);
        bitvec.set(1);

        assert_eq!(format!("{:?}", bitvec), "BitVec(0100)");
    }
}
