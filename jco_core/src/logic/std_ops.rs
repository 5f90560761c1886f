use core::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

use crate::ByteVec;

macro_rules! impl_binop {
    ($($trait:ident, $fn:ident, $inherent:ident);*;) => {
        $(
            impl<'a> $trait<&'a ByteVec> for &'a ByteVec {
                type Output = ByteVec;

                fn $fn(self, rhs: &'a ByteVec) -> ByteVec {
                    ByteVec::$inherent(self, rhs)
                }
            }
        )*
    };
}

impl_binop!(
    Add, add, add;
    Sub, sub, subtract;
    BitAnd, bitand, and;
    BitOr, bitor, or;
    BitXor, bitxor, xor;
);

impl<'a> Not for &'a ByteVec {
    type Output = ByteVec;

    fn not(self) -> ByteVec {
        ByteVec::not(self)
    }
}

impl<'a> Shl<u64> for &'a ByteVec {
    type Output = ByteVec;

    fn shl(self, s: u64) -> ByteVec {
        self.shl_bits(s)
    }
}

impl<'a> Shr<u64> for &'a ByteVec {
    type Output = ByteVec;

    /// Logical shift right
    fn shr(self, s: u64) -> ByteVec {
        self.lshr_bits(s)
    }
}

#[test]
fn operators_match_methods() {
    let a = ByteVec::from([0x4a, 0xef, 0xae]);
    let b = ByteVec::from([0x0c]);
    assert_eq!(&a + &b, a.add(&b));
    assert_eq!(&a - &b, a.subtract(&b));
    assert_eq!(&a & &b, a.and(&b));
    assert_eq!(&a | &b, a.or(&b));
    assert_eq!(&a ^ &b, a.xor(&b));
    assert_eq!(!&a, a.not());
    assert_eq!(&a << 4, a.shl_bits(4));
    assert_eq!(&a >> 4, a.lshr_bits(4));
}
