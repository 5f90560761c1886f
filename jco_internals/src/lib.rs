//! This crate contains common developer utilities for crates within the `jco`
//! system, such as the byte level arithmetic primitives that the byte-vector
//! engine is built around and the error type shared by the string conversion
//! functions. Most users should never have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `jco_core` and `jco`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

mod pad_limit;
mod serde_common;
mod widening;

pub use pad_limit::PadLimit;
pub use serde_common::*;
pub use widening::{byte_add, short_divide, widen_mul_add};

/// Bitwidth of a byte
pub const BYTE_BITS: usize = u8::BITS as usize;

/// Number of bits in a `u64`
pub const U64_BITS: u64 = u64::BITS as u64;

/// Returns the number of bytes required to hold `bits` bits
#[inline]
pub const fn bits_to_bytes(bits: u64) -> u64 {
    (bits / 8) + ((bits % 8 != 0) as u64)
}

/// Returns the number of bits needed to represent `b`, which is 0 for 0
#[inline]
pub const fn nbits_u8(b: u8) -> u8 {
    (u8::BITS - b.leading_zeros()) as u8
}

/// Returns the number of bits needed to represent `x`, which is 0 for 0
#[inline]
pub const fn nbits_u64(x: u64) -> u64 {
    (u64::BITS - x.leading_zeros()) as u64
}

/// Returns the number of bytes needed to represent `x`
#[inline]
pub const fn nbytes_u64(x: u64) -> u64 {
    bits_to_bytes(nbits_u64(x))
}

/// Returns the index of the first nonzero byte of `bytes`, or `bytes.len()` if
/// they are all zero
#[inline]
pub const fn first_nonzero(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != 0 {
            return i
        }
        i += 1;
    }
    bytes.len()
}
