use jco::ByteVec;
use num_bigint::BigUint;
use num_traits::One;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod identities;
mod shifts;
mod strings;

pub use identities::identities;
pub use shifts::shifts;
pub use strings::strings;

/// Returns a random `ByteVec` of at most `max_len` bytes. Leading zero bytes,
/// all zero, and all ones values are generated more often than they would be
/// by uniform sampling.
pub fn rand_byte_vec(rng: &mut Xoshiro128StarStar, max_len: usize) -> ByteVec {
    let len = (rng.next_u32() as usize) % (max_len + 1);
    match rng.next_u32() % 8 {
        0 => ByteVec::zeros(len),
        1 => ByteVec::umax(len),
        2 => {
            let x = ByteVec::rand_using(rng, len).unwrap();
            let lz = (rng.next_u32() as usize) % (len + 1);
            x.truncate(len - lz).prepend_zeros(lz, jco::PadLimit::UNLIMITED)
        }
        _ => ByteVec::rand_using(rng, len).unwrap(),
    }
}

pub fn big(x: &ByteVec) -> BigUint {
    BigUint::from_bytes_be(x)
}

/// `2^(8 * len)`
pub fn modulus(len: usize) -> BigUint {
    BigUint::one() << (8 * len)
}

/// Checks that `lhs` and `rhs` have the same value
#[track_caller]
pub fn eq_value(lhs: &ByteVec, rhs: &BigUint) {
    if big(lhs) != *rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:#x}");
    }
}
