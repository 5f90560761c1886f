//! Common serialization utilities

use core::fmt;

// The free functions in `jco_core` that convert to and from strings need
// `SerdeError`, and so does the command line front end which only depends on
// the facade, so it lives here at the bottom of the crate graph.

/// A serialization or deserialization error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SerdeError {
    /// The input is empty
    Empty,
    /// The input has a sign or radix prefix but no digits after it
    EmptyInteger,
    /// There is an unrecognized character that is not `_`, `0..=9`, `a..=z`,
    /// or `A..=Z` depending on the radix and other context
    InvalidChar,
    /// A radix is not in the range `2..=36`
    InvalidRadix,
    /// A negative number was given where only unsigned numbers are allowed
    NegativeUnsigned,
    /// The value represented by the string cannot fit in the destination, or
    /// internal estimates of the size overflowed
    Overflow,
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Empty => "empty input",
            EmptyInteger => "no digits after the sign or radix prefix",
            InvalidChar => "invalid character for the radix",
            InvalidRadix => "radix is not in the range 2..=36",
            NegativeUnsigned => "negative numbers are not supported",
            Overflow => "value does not fit",
        };
        f.write_str(s)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerdeError {}

use SerdeError::*;

/// Binary logarithms of the integers 2..=36 rounded up and in u16p13 fixed
/// point format
pub const LB_I3F13: [u16; 37] = [
    0, 0, 8192, 12985, 16384, 19022, 21177, 22998, 24576, 25969, 27214, 28340, 29369, 30315, 31190,
    32006, 32768, 33485, 34161, 34800, 35406, 35982, 36532, 37058, 37561, 38043, 38507, 38953,
    39382, 39797, 40198, 40585, 40960, 41324, 41677, 42020, 42353,
];

/// Reciprocal binary logarithms of the numbers 2..=36 rounded up and in u16p15
/// fixed point format
pub const INV_LB_I1F15: [u16; 37] = [
    0, 0, 32768, 20675, 16384, 14113, 12677, 11673, 10923, 10338, 9865, 9473, 9141, 8856, 8607,
    8388, 8192, 8017, 7859, 7714, 7582, 7461, 7349, 7244, 7147, 7057, 6972, 6892, 6817, 6746, 6678,
    6615, 6554, 6496, 6441, 6389, 6339,
];

/// Returns an upper bound on the number of bytes needed to hold the value of
/// a string of `len` digits in `radix`. This never underestimates.
pub const fn bytes_upper_bound(len: usize, radix: u8) -> Result<usize, SerdeError> {
    if radix < 2 || radix > 36 {
        return Err(InvalidRadix)
    }
    // the increments guard against all digits being the maximum for the radix,
    // the multiplication is checked for absurd lengths
    if let Some(tmp) = (LB_I3F13[radix as usize] as u128).checked_mul((len as u128) + 1) {
        let bits = (tmp >> 13) + 1;
        let bytes = (bits / 8) + 1;
        if bytes <= (isize::MAX as u128) {
            return Ok(bytes as usize)
        }
    }
    Err(Overflow)
}

/// Returns an upper bound on the number of characters in `radix` needed to
/// represent `significant_bits` bits. This is always at least 1.
pub const fn chars_upper_bound(significant_bits: usize, radix: u8) -> Result<usize, SerdeError> {
    if radix < 2 || radix > 36 {
        return Err(InvalidRadix)
    }
    if let Some(tmp) =
        (INV_LB_I1F15[radix as usize] as u128).checked_mul((significant_bits as u128) + 1)
    {
        let estimate = (tmp >> 15) + 1;
        if estimate <= (isize::MAX as u128) {
            return Ok(estimate as usize)
        }
    }
    Err(Overflow)
}
