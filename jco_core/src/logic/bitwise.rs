use crate::ByteVec;

/// A bytewise boolean operator for [ByteVec::bitwise]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

impl BitwiseOp {
    /// Applies the operator to a pair of bytes
    #[inline]
    pub const fn apply(self, x: u8, y: u8) -> u8 {
        match self {
            BitwiseOp::And => x & y,
            BitwiseOp::Or => x | y,
            BitwiseOp::Xor => x ^ y,
        }
    }
}

/// # Bitwise
impl ByteVec {
    /// Pads `self` and `rhs` to equal length and applies `op` to each pair of
    /// bytes
    pub fn bitwise(&self, rhs: &Self, op: BitwiseOp) -> Self {
        let (lhs, rhs) = self.pad_to_equal_size(rhs);
        lhs.iter()
            .zip(rhs.iter())
            .map(|(x, y)| op.apply(*x, *y))
            .collect()
    }

    /// Returns `self & rhs`
    #[inline]
    pub fn and(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, BitwiseOp::And)
    }

    /// Returns `self | rhs`
    #[inline]
    pub fn or(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, BitwiseOp::Or)
    }

    /// Returns `self ^ rhs`
    #[inline]
    pub fn xor(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, BitwiseOp::Xor)
    }

    /// Returns the bitwise complement of every byte. The length, and any
    /// leading zeros which become `0xff`, are kept.
    pub fn not(&self) -> Self {
        self.iter().map(|x| !*x).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators() {
        let a = ByteVec::from([0x4a, 0xef, 0xae]);
        let b = ByteVec::from([0x0c]);
        assert_eq!(a.or(&b), [0x4a, 0xef, 0xae]);
        assert_eq!(a.and(&b), [0x00, 0x00, 0x0c]);
        assert_eq!(a.xor(&b), [0x4a, 0xef, 0xa2]);
        // the complement is taken at the unpadded width of `b`
        assert_eq!(a.xor(&b.not()), [0x4a, 0xef, 0x5d]);
        assert_eq!(a.and(&b.not()), [0x00, 0x00, 0xa2]);
        assert_eq!(b.and(&a.not()), [0x00, 0x00, 0x00]);
        let b = b.zero_extend(3);
        assert_eq!(a.xor(&b.not()), [0xb5, 0x10, 0x5d]);
        assert_eq!(a.and(&b.not()), [0x4a, 0xef, 0xa2]);
        assert_eq!(a.bitwise(&b, BitwiseOp::Xor), a.xor(&b));
    }

    #[test]
    fn complement() {
        assert!(ByteVec::new().not().is_empty());
        assert_eq!(ByteVec::from([0, 0x0f]).not(), [0xff, 0xf0]);
        let x = ByteVec::from([0x00, 0x12, 0xff]);
        assert_eq!(x.not().not(), x);
    }
}
