//! ## Basic Invariants
//!
//! - A `ByteVec` is stored in big endian order: index 0 is the most
//!   significant byte.
//! - Any length is valid. The empty `ByteVec` is the canonical zero, and
//!   leading zero bytes do not change the represented value. Operations never
//!   strip leading zeros unless documented, because the length of an operand is
//!   the width that complement, negation, and subtraction work at.
//! - A `ByteVec` is never mutated by an operation. Every operation returns a
//!   new `ByteVec`.

use alloc::{vec, vec::Vec};

use jco_internals::*;

/// An unsigned integer of arbitrary length, stored as big endian bytes.
///
/// `ByteVec` does not know about any bitwidth other than its own length in
/// bytes. Binary operations first zero pad the shorter operand to the length
/// of the longer one (see [ByteVec::pad_to_equal_size]), so mixing lengths is
/// always allowed. Equality through `PartialEq` is exact byte equality, use
/// [ByteVec::equivalent] to compare values regardless of leading zeros.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteVec {
    bytes: Vec<u8>,
}

/// # Construction and access
impl ByteVec {
    /// Returns the canonical zero, which is empty
    #[inline]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    #[inline]
    pub(crate) const fn from_raw(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns `n` zero bytes
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self { bytes: vec![0; n] }
    }

    /// Returns `n` bytes with all bits set
    #[inline]
    pub fn umax(n: usize) -> Self {
        Self {
            bytes: vec![0xff; n],
        }
    }

    /// Returns the minimal big endian encoding of `x`. Zero is encoded as the
    /// empty `ByteVec`, values below 256 as a single byte.
    pub fn from_u64(x: u64) -> Self {
        if x == 0 {
            Self::new()
        } else if x < 256 {
            Self {
                bytes: vec![x as u8],
            }
        } else {
            let buf = x.to_be_bytes();
            Self::from(&buf[(buf.len() - (nbytes_u64(x) as usize))..])
        }
    }

    /// Returns the number of bytes, including leading zeros
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// If there are no bytes at all. Note that this is stricter than
    /// [ByteVec::is_zero].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the big endian bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the inner `Vec<u8>`
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the number of leading zero bytes
    #[inline]
    pub fn leading_zero_bytes(&self) -> usize {
        first_nonzero(&self.bytes)
    }
}

/// # Padding and truncation
impl ByteVec {
    /// Returns `self` with `n` zero bytes prepended, where `n` is capped by
    /// `limit`. The value is unchanged.
    pub fn prepend_zeros(&self, n: usize, limit: PadLimit) -> Self {
        let n = limit.clamp(n);
        let mut bytes = Vec::with_capacity(n.saturating_add(self.len()));
        bytes.resize(n, 0);
        bytes.extend_from_slice(&self.bytes);
        Self { bytes }
    }

    /// Returns `self` left padded with zeros up to a length of `n`, or `self`
    /// unchanged if it is already at least `n` bytes long. This is not subject
    /// to a `PadLimit`.
    pub fn zero_extend(&self, n: usize) -> Self {
        if n <= self.len() {
            self.clone()
        } else {
            self.prepend_zeros(n - self.len(), PadLimit::UNLIMITED)
        }
    }

    /// Returns the last `n` bytes, or all of `self` if `n >= self.len()`. This
    /// is a wrapping truncation that can lose information.
    pub fn truncate(&self, n: usize) -> Self {
        if n >= self.len() {
            self.clone()
        } else {
            Self::from(&self.bytes[(self.len() - n)..])
        }
    }

    /// Returns the canonical form of `self`, with leading zero bytes removed
    pub fn trim_leading_zeros(&self) -> Self {
        Self::from(&self.bytes[self.leading_zero_bytes()..])
    }

    /// Returns `self` and `rhs` zero padded to the same length, which is the
    /// length of the longer one. Neither value is ever shortened.
    pub fn pad_to_equal_size(&self, rhs: &Self) -> (Self, Self) {
        let w = core::cmp::max(self.len(), rhs.len());
        (self.zero_extend(w), rhs.zero_extend(w))
    }
}
