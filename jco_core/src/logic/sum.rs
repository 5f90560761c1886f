use alloc::vec::Vec;

use jco_internals::*;

use crate::ByteVec;

/// # Summation
impl ByteVec {
    /// Returns `self + rhs`. The result is as long as the longer operand, or
    /// one byte longer if there is a carry out of the most significant byte.
    pub fn add(&self, rhs: &Self) -> Self {
        let (lhs, rhs) = self.pad_to_equal_size(rhs);
        // digits are produced least significant first and reversed at the end
        let mut sum = Vec::with_capacity(lhs.len() + 1);
        let mut carry = 0;
        for (x, y) in lhs.iter().rev().zip(rhs.iter().rev()) {
            let tmp = byte_add(*x, *y, carry);
            sum.push(tmp.0);
            carry = tmp.1;
        }
        if carry != 0 {
            sum.push(carry);
        }
        sum.reverse();
        ByteVec::from(sum)
    }

    /// Returns the two's complement of `self` at the width of `self`, which is
    /// `!self + 1` truncated to `self.len()` bytes. The empty `ByteVec` is its
    /// own negation.
    pub fn twos_complement(&self) -> Self {
        if self.is_empty() {
            return Self::new()
        }
        self.not().add(&ByteVec::from([1])).truncate(self.len())
    }

    /// Returns `self - rhs` wrapping modulo `2^(8 * w)`, where `w` is the
    /// length of the longer operand. A borrow out of the most significant byte
    /// is silently discarded, so for example `[0x00] - [0x01] == [0xff]`.
    pub fn subtract(&self, rhs: &Self) -> Self {
        let (lhs, rhs) = self.pad_to_equal_size(rhs);
        lhs.add(&rhs.twos_complement()).truncate(lhs.len())
    }
}
