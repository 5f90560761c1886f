use jco_internals::*;

use crate::ByteVec;

/// # Miscellanious
impl ByteVec {
    /// Returns the number of set bits
    pub fn count_ones(&self) -> u64 {
        self.iter().map(|x| x.count_ones() as u64).sum()
    }

    /// Returns the number of leading zero bits. All zero bytes count 8 each,
    /// so this is `8 * self.len()` if `self.is_zero()`.
    pub fn lz(&self) -> u64 {
        let i = self.leading_zero_bytes();
        let lz = (i as u64) * 8;
        match self.get(i) {
            Some(x) => lz + (x.leading_zeros() as u64),
            None => lz,
        }
    }

    /// Returns the number of significant bits, which is the minimum bitwidth
    /// needed to represent the value of `self`. Zero needs zero bits.
    pub fn sig(&self) -> u64 {
        let i = self.leading_zero_bytes();
        match self.get(i) {
            Some(x) => (nbits_u8(*x) as u64) + (((self.len() - 1 - i) as u64) * 8),
            None => 0,
        }
    }

    /// Returns the value of `self` if it fits in a `u64`
    pub fn to_u64(&self) -> Option<u64> {
        if self.sig() > U64_BITS {
            return None
        }
        Some(
            self.iter()
                .skip(self.leading_zero_bytes())
                .fold(0u64, |acc, x| (acc << 8) | (*x as u64)),
        )
    }

    /// Returns the population count of `self` in canonical form
    pub fn popcount(&self) -> Self {
        Self::from_u64(self.count_ones())
    }

    /// Returns the leading zero count of `self` in canonical form
    pub fn clz(&self) -> Self {
        Self::from_u64(self.lz())
    }

    /// Returns the number of bits needed to represent `self`, in canonical
    /// form
    pub fn nbits(&self) -> Self {
        Self::from_u64(self.sig())
    }
}
