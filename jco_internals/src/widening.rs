/// Computes x + y + z and returns the widened result as a tuple of the sum
/// modulo 256 and the carry. The carry is at most 2, and is at most 1 if `z`
/// is 0 or 1.
#[inline]
pub const fn byte_add(x: u8, y: u8, z: u8) -> (u8, u8) {
    let (sum, carry0) = x.overflowing_add(y);
    let (sum, carry1) = sum.overflowing_add(z);
    (sum, (carry0 as u8) + (carry1 as u8))
}

/// Computes x * y + z and returns the widened result as a tuple of the low
/// and high bytes. This cannot overflow because `255 * 255 + 255 < 2^16`.
#[inline]
pub const fn widen_mul_add(x: u8, y: u8, z: u8) -> (u8, u8) {
    let tmp = (x as u16) * (y as u16) + (z as u16);
    (tmp as u8, (tmp >> 8) as u8)
}

/// Divides the two byte number `(rem, x)` by `div` and returns the quotient
/// and remainder. `rem < div` must hold so that the quotient fits in a byte.
///
/// # Panics
///
/// If `div == 0`
#[inline]
pub const fn short_divide(rem: u8, x: u8, div: u8) -> (u8, u8) {
    let tmp = ((rem as u16) << 8) | (x as u16);
    ((tmp / (div as u16)) as u8, (tmp % (div as u16)) as u8)
}

#[test]
fn byte_add_carries() {
    assert_eq!(byte_add(0, 0, 0), (0, 0));
    assert_eq!(byte_add(0xf0, 0x0f, 0), (0xff, 0));
    assert_eq!(byte_add(0xf0, 0x10, 0), (0x00, 1));
    assert_eq!(byte_add(0xff, 0xff, 0), (0xfe, 1));
    assert_eq!(byte_add(0xff, 0x00, 1), (0x00, 1));
    assert_eq!(byte_add(0xff, 0xff, 1), (0xff, 1));
    assert_eq!(byte_add(0xff, 0xff, 0xff), (0xfd, 2));
}

#[test]
fn widen_mul_add_bounds() {
    assert_eq!(widen_mul_add(0, 0, 0), (0, 0));
    assert_eq!(widen_mul_add(0xff, 0xff, 0xff), (0x00, 0xff));
    assert_eq!(widen_mul_add(0x10, 10, 5), (0xa5, 0));
}

#[test]
fn short_divide_remainders() {
    assert_eq!(short_divide(0, 0xff, 10), (25, 5));
    assert_eq!(short_divide(9, 0xff, 10), (255, 9));
    assert_eq!(short_divide(1, 0x00, 16), (16, 0));
}
