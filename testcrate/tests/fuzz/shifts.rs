use jco::ByteVec;
use num_bigint::BigUint;
use num_traits::One;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{big, eq_value, modulus, rand_byte_vec};

/// Checks the shifts against `u64` shifts for values of up to 8 bytes, and
/// against `num-bigint` for longer values
pub fn shifts(iters: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x = rand_byte_vec(&mut rng, max_len);
        let bw = 8 * (x.len() as u64);
        // includes shifts of the full bitwidth and more
        let s = (rng.next_u64()) % (bw + 9);
        let lshr = x.lshr_bits(s);
        let shl = x.shl_bits(s);
        assert_eq!(lshr.len(), x.len());
        assert_eq!(shl.len(), x.len());
        assert_eq!(x.lshr(&ByteVec::from_u64(s)), lshr);
        assert_eq!(x.shl(&ByteVec::from_u64(s)), shl);
        if x.len() <= 8 {
            let v = x.to_u64().unwrap();
            let mask = if bw == 64 { u64::MAX } else { (1u64 << bw) - 1 };
            let expected_lshr = if s >= 64 { 0 } else { v >> s };
            let expected_shl = if s >= 64 { 0 } else { (v << s) & mask };
            assert_eq!(lshr.to_u64(), Some(expected_lshr));
            assert_eq!(shl.to_u64(), Some(expected_shl));
        }
        eq_value(&lshr, &(big(&x) >> s));
        eq_value(&shl, &((big(&x) << s) % modulus(x.len())));
        // shifting back and forth clears the bits that were shifted out
        if s < bw {
            let cleared = x.shl_bits(s).lshr_bits(s);
            eq_value(&cleared, &(big(&x) % (BigUint::one() << (bw - s))));
        }
    }
    // amounts that do not fit in a `u64`
    let x = ByteVec::umax(4);
    let s = ByteVec::from([1, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(x.lshr(&s), ByteVec::zeros(4));
    assert_eq!(x.shl(&s), ByteVec::zeros(4));
}
