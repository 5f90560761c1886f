use core::cmp;

use jco::{BitwiseOp, ByteVec, PadLimit};
use num_bigint::BigUint;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{big, eq_value, modulus, rand_byte_vec};

fn identities_inner(x0: &ByteVec, x1: &ByteVec) {
    let (b0, b1) = (big(x0), big(x1));
    let w = cmp::max(x0.len(), x1.len());
    let m = modulus(w);

    // padding
    let (p0, p1) = x0.pad_to_equal_size(x1);
    assert_eq!(p0.len(), w);
    assert_eq!(p1.len(), w);
    assert!(p0.equivalent(x0));
    assert!(p1.equivalent(x1));
    assert!(p0.right_is_suffix_of_left(x0));
    assert_eq!(x0.prepend_zeros(3, PadLimit::new(2)).len(), x0.len() + 2);
    assert!(x0.trim_leading_zeros().equivalent(x0));
    assert_ne!(x0.trim_leading_zeros().first(), Some(&0));

    // comparison
    assert_eq!(x0.cmp_value(x1), b0.cmp(&b1));
    assert_eq!(x0.left_is_greater(x1), b0 > b1);
    assert_eq!(x0.left_is_greater_or_equal(x1), b0 >= b1);
    assert_eq!(x0.equivalent(x1), b0 == b1);
    assert!(x0.left_is_greater_or_equal(x0));
    assert_eq!(x0.is_zero(), b0 == BigUint::default());

    // summation
    let sum = x0.add(x1);
    eq_value(&sum, &(&b0 + &b1));
    assert!(sum.len() == w || (sum.len() == w + 1 && sum[0] == 1));
    assert_eq!(sum, x1.add(x0));
    assert!(sum.left_is_greater_or_equal(x0));
    assert!(sum.left_is_greater_or_equal(x1));
    assert_eq!(x0.add(&ByteVec::new()), *x0);
    assert_eq!(x0.subtract(&ByteVec::new()), *x0);
    assert_eq!(ByteVec::new().subtract(x0), x0.twos_complement());
    let diff = x0.subtract(x1);
    assert_eq!(diff.len(), w);
    eq_value(&diff, &((&b0 + &m - &b1) % &m));
    assert!(x0.subtract(x0).is_zero());
    assert!(sum.subtract(x1).equivalent(x0));
    assert_eq!(diff, x1.subtract(x0).twos_complement());
    assert_eq!(x0.twos_complement().twos_complement(), *x0);
    assert_eq!(x0.twos_complement().len(), x0.len());
    assert!(x0.add(&x0.twos_complement()).truncate(x0.len()).is_zero());

    // bitwise
    let and = x0.and(x1);
    let or = x0.or(x1);
    let xor = x0.xor(x1);
    assert_eq!(and.len(), w);
    eq_value(&and, &(&b0 & &b1));
    eq_value(&or, &(&b0 | &b1));
    eq_value(&xor, &(&b0 ^ &b1));
    assert_eq!(xor, x0.bitwise(x1, BitwiseOp::Xor));
    assert_eq!(x0.not().not(), *x0);
    assert_eq!(x0.not().len(), x0.len());
    assert!(x0.xor(x0).is_zero());
    assert!(x0.xor(&x0.not()).is_umax());
    assert!(x0.and(&ByteVec::zeros(x1.len())).is_zero());
    let umax = ByteVec::umax(x0.len());
    assert_eq!(x0.or(&umax), umax);
    assert_eq!(x0.xor(&umax), x0.not());
    assert!(xor.xor(x1).equivalent(x0));
    assert_eq!(p0.and(&p1).not(), p0.not().or(&p1.not()));
    assert_eq!(p0.or(&p1).not(), p0.not().and(&p1.not()));
    // `a + b == (a ^ b) + 2(a & b)`
    assert!(sum.equivalent(&xor.add(&and).add(&and)));

    // counting
    assert_eq!(x0.count_ones(), b0.count_ones());
    assert_eq!(x0.sig(), b0.bits());
    assert_eq!(x0.lz() + x0.sig(), 8 * (x0.len() as u64));
    assert_eq!(x0.popcount().to_u64(), Some(x0.count_ones()));
    assert_eq!(x0.clz().to_u64(), Some(x0.lz()));
    assert_eq!(x0.nbits().to_u64(), Some(x0.sig()));
    assert_eq!(x0.count_ones() + x0.not().count_ones(), 8 * (x0.len() as u64));

    // reorderings are involutions that keep the length
    assert_eq!(x0.byte_reverse().byte_reverse(), *x0);
    assert_eq!(x0.bit_reverse().bit_reverse(), *x0);
    assert_eq!(x0.nibble_swap().nibble_swap(), *x0);
    assert_eq!(x0.bitstring_reverse().bitstring_reverse(), *x0);
    assert_eq!(x0.bitstring_reverse(), x0.byte_reverse().bit_reverse());
    assert_eq!(x0.bitstring_reverse().count_ones(), x0.count_ones());
    assert_eq!(x0.nibble_swap().len(), x0.len());

    // normalization to a random width
    let width = x1.len();
    let n = jco::normalize(x0, width, PadLimit::UNLIMITED);
    assert_eq!(n.bytes.len(), width);
    eq_value(&n.bytes, &(&b0 % modulus(width)));
    assert_eq!(n.lossy, b0 >= modulus(width));
    let r = jco::render(x0, width, PadLimit::UNLIMITED);
    assert_eq!(r.lossy, n.lossy);
    assert_eq!(r.hex.len(), 2 + 2 * width + (r.lossy as usize));
    assert_eq!(r.bin.len(), 2 + 8 * width + (r.lossy as usize));
}

/// Checks arithmetic and bit manipulation identities, using `num-bigint` as
/// an oracle where one exists
pub fn identities(iters: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x0 = rand_byte_vec(&mut rng, max_len);
        let x1 = rand_byte_vec(&mut rng, max_len);
        identities_inner(&x0, &x1);
    }
}
