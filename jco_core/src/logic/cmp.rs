use core::cmp::Ordering;

use crate::ByteVec;

/// # Comparison
impl ByteVec {
    /// If all bytes are zero, including when there are no bytes
    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| *x == 0)
    }

    /// If all bytes are `0xff`. An empty `ByteVec` is both zero and
    /// unsigned-maximum.
    pub fn is_umax(&self) -> bool {
        self.iter().all(|x| *x == 0xff)
    }

    /// Compares the values of `self` and `rhs` as unsigned integers, ignoring
    /// leading zeros.
    ///
    /// After padding both to equal length, the first differing byte from the
    /// most significant end decides the order. If the scan runs off the end
    /// the values are equal.
    pub fn cmp_value(&self, rhs: &Self) -> Ordering {
        let (lhs, rhs) = self.pad_to_equal_size(rhs);
        for (l, r) in lhs.iter().zip(rhs.iter()) {
            match l.cmp(r) {
                Ordering::Equal => (),
                o => return o,
            }
        }
        Ordering::Equal
    }

    /// If `self` represents a strictly greater number than `rhs`
    pub fn left_is_greater(&self, rhs: &Self) -> bool {
        self.cmp_value(rhs) == Ordering::Greater
    }

    /// If `self` represents a number greater than or equal to `rhs`
    pub fn left_is_greater_or_equal(&self, rhs: &Self) -> bool {
        self.cmp_value(rhs) != Ordering::Less
    }

    /// If `self` and `rhs` represent the same number, regardless of leading
    /// zeros
    pub fn equivalent(&self, rhs: &Self) -> bool {
        let (lhs, rhs) = self.pad_to_equal_size(rhs);
        lhs == rhs
    }

    /// If the last `rhs.len()` bytes of `self` are exactly `rhs`. This is
    /// false if `rhs` is longer than `self`.
    ///
    /// This is useful for checking that trimming a number only removed a zero
    /// prefix.
    pub fn right_is_suffix_of_left(&self, rhs: &Self) -> bool {
        self.ends_with(rhs)
    }
}
