use crate::ByteVec;

/// Returns the byte at `i` if it is in bounds, otherwise zero
#[inline]
fn get_or_zero(bytes: &[u8], i: Option<usize>) -> u8 {
    match i {
        Some(i) => bytes.get(i).copied().unwrap_or(0),
        None => 0,
    }
}

/// # Bit permutation
impl ByteVec {
    /// Returns `self` with the byte order reversed. Trailing zero bytes become
    /// leading zero bytes and are kept.
    pub fn byte_reverse(&self) -> Self {
        self.iter().rev().copied().collect()
    }

    /// Returns `self` with the bit order within each byte reversed. The byte
    /// order is unchanged.
    pub fn bit_reverse(&self) -> Self {
        self.iter().map(|x| x.reverse_bits()).collect()
    }

    /// Returns `self` with the two nibbles of each byte swapped
    pub fn nibble_swap(&self) -> Self {
        self.iter().map(|x| x.rotate_left(4)).collect()
    }

    /// Returns `self` with the whole bit string reversed, so that the most
    /// significant bit becomes the least significant bit
    pub fn bitstring_reverse(&self) -> Self {
        self.iter().rev().map(|x| x.reverse_bits()).collect()
    }

    /// Logical-shift-rights `self` by `s` bits, keeping the length. Shifting by
    /// the bitwidth of `self` or more results in zero.
    pub fn lshr_bits(&self, s: u64) -> Self {
        let len = self.len();
        if s >= (len as u64).saturating_mul(8) {
            return Self::zeros(len)
        }
        // `s` is below `8 * len` so these fit
        let digits = (s / 8) as usize;
        let bits = (s % 8) as u32;
        (0..len)
            .map(|i| {
                let hi = get_or_zero(self, i.checked_sub(digits));
                if bits == 0 {
                    hi
                } else {
                    let lo = get_or_zero(self, i.checked_sub(digits + 1));
                    (hi >> bits) | (lo << (8 - bits))
                }
            })
            .collect()
    }

    /// Shift-lefts `self` by `s` bits, keeping the length. Bits shifted past
    /// the most significant byte are lost.
    pub fn shl_bits(&self, s: u64) -> Self {
        let len = self.len();
        if s >= (len as u64).saturating_mul(8) {
            return Self::zeros(len)
        }
        let digits = (s / 8) as usize;
        let bits = (s % 8) as u32;
        (0..len)
            .map(|i| {
                let lo = get_or_zero(self, Some(i + digits));
                if bits == 0 {
                    lo
                } else {
                    let next = get_or_zero(self, Some(i + digits + 1));
                    (lo << bits) | (next >> (8 - bits))
                }
            })
            .collect()
    }

    /// Logical-shift-rights `self` by the value of `s` bits. If `s` does not
    /// fit in a `u64`, the result is zero.
    pub fn lshr(&self, s: &Self) -> Self {
        match s.to_u64() {
            Some(s) => self.lshr_bits(s),
            None => Self::zeros(self.len()),
        }
    }

    /// Shift-lefts `self` by the value of `s` bits. If `s` does not fit in a
    /// `u64`, the result is zero.
    pub fn shl(&self, s: &Self) -> Self {
        match s.to_u64() {
            Some(s) => self.shl_bits(s),
            None => Self::zeros(self.len()),
        }
    }
}
