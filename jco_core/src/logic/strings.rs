use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use jco_internals::{SerdeError::*, *};

use crate::ByteVec;

/// # String conversion
impl ByteVec {
    /// Parses the digits of `src` in `radix`. Digits are `0..=9`, `a..=z`, and
    /// `A..=Z` as far as the radix allows, and `_` separators are ignored. No
    /// sign or prefix is accepted, see [ByteVec::parse_literal] for that. The
    /// result is in canonical form.
    ///
    /// # Errors
    ///
    /// `Empty` if `src` is empty, `EmptyInteger` if it only contains
    /// separators, `InvalidRadix` if `radix` is not in `2..=36`, and
    /// `InvalidChar` for any character that is not a digit in `radix`.
    pub fn from_str_radix(src: &str, radix: u8) -> Result<Self, SerdeError> {
        if radix < 2 || radix > 36 {
            return Err(InvalidRadix)
        }
        if src.is_empty() {
            return Err(Empty)
        }
        // little endian accumulator
        let mut acc: Vec<u8> = Vec::with_capacity(bytes_upper_bound(src.len(), radix)?);
        let mut any_digits = false;
        for c in src.chars() {
            if c == '_' {
                continue
            }
            let digit = match c.to_digit(radix as u32) {
                Some(d) => d as u8,
                None => return Err(InvalidChar),
            };
            any_digits = true;
            let mut carry = digit;
            for x in acc.iter_mut() {
                let tmp = widen_mul_add(*x, radix, carry);
                *x = tmp.0;
                carry = tmp.1;
            }
            if carry != 0 {
                acc.push(carry);
            }
        }
        if !any_digits {
            return Err(EmptyInteger)
        }
        acc.reverse();
        Ok(ByteVec::from(acc))
    }

    /// Parses an unsigned integer literal. An optional `+` sign may be followed
    /// by a `0x`, `0o`, or `0b` prefix (in either case) for hexadecimal, octal,
    /// or binary. A lone leading `0` followed by more digits also means octal,
    /// and anything else is decimal. The result is in canonical form.
    ///
    /// ```
    /// use jco_core::{ByteVec, SerdeError};
    ///
    /// assert_eq!(ByteVec::parse_literal("0x1ff").unwrap(), [0x01, 0xff]);
    /// assert_eq!(ByteVec::parse_literal("0o17").unwrap(), [0x0f]);
    /// assert_eq!(ByteVec::parse_literal("017").unwrap(), [0x0f]);
    /// assert_eq!(ByteVec::parse_literal("1_000").unwrap(), [0x03, 0xe8]);
    /// assert!(ByteVec::parse_literal("0").unwrap().is_empty());
    /// assert_eq!(ByteVec::parse_literal("-1"), Err(SerdeError::NegativeUnsigned));
    /// ```
    ///
    /// # Errors
    ///
    /// `NegativeUnsigned` if there is a leading `-`, `EmptyInteger` if there
    /// are no digits after a sign or prefix, otherwise the same as
    /// [ByteVec::from_str_radix].
    pub fn parse_literal(src: &str) -> Result<Self, SerdeError> {
        if src.is_empty() {
            return Err(Empty)
        }
        if src.starts_with('-') {
            return Err(NegativeUnsigned)
        }
        let src = src.strip_prefix('+').unwrap_or(src);
        let (digits, radix) = match src.as_bytes() {
            [b'0', b'x' | b'X', ..] => (&src[2..], 16),
            [b'0', b'o' | b'O', ..] => (&src[2..], 8),
            [b'0', b'b' | b'B', ..] => (&src[2..], 2),
            [b'0', _, ..] => (&src[1..], 8),
            _ => (src, 10),
        };
        if digits.is_empty() {
            return Err(EmptyInteger)
        }
        Self::from_str_radix(digits, radix)
    }

    /// Returns the decimal representation of the value, with no leading zeros
    /// and `"0"` for zero
    pub fn to_dec_string(&self) -> String {
        let mut quo = self.trim_leading_zeros().into_vec();
        if quo.is_empty() {
            return String::from("0")
        }
        let mut digits: Vec<u8> =
            Vec::with_capacity(chars_upper_bound(quo.len() * BYTE_BITS, 10).unwrap_or(0));
        // repeated short division, dropping quotient bytes as they become zero
        let mut start = 0;
        while start < quo.len() {
            let mut rem = 0;
            for x in quo[start..].iter_mut() {
                let tmp = short_divide(rem, *x, 10);
                *x = tmp.0;
                rem = tmp.1;
            }
            digits.push(b'0' + rem);
            while start < quo.len() && quo[start] == 0 {
                start += 1;
            }
        }
        digits.reverse();
        // only ASCII digits were pushed
        digits.into_iter().map(char::from).collect()
    }

    /// Returns `0x` followed by the lowercase hexadecimal bytes of `self`,
    /// zero padded to be at least `min_bytes` long. Leading zero bytes of
    /// `self` are kept.
    pub fn to_hex_string(&self, min_bytes: usize) -> String {
        let padded = self.zero_extend(min_bytes);
        let mut s = String::with_capacity(2 + 2 * padded.len());
        s.push_str("0x");
        s.push_str(&hex::encode(padded.as_bytes()));
        s
    }

    /// Returns `0b` followed by the bits of `self`, most significant first,
    /// zero padded to be at least `min_bytes` long. Leading zero bytes of
    /// `self` are kept.
    pub fn to_bin_string(&self, min_bytes: usize) -> String {
        let padded = self.zero_extend(min_bytes);
        let mut s = String::with_capacity(2 + 8 * padded.len());
        s.push_str("0b");
        for x in padded.iter() {
            for i in (0..8).rev() {
                s.push(if (x >> i) & 1 == 0 { '0' } else { '1' });
            }
        }
        s
    }

    /// Returns the significant digits of the value in `radix` 2 or 16, `"0"`
    /// for zero
    fn significant_digits(&self, radix: u8, upper: bool) -> String {
        let trimmed = self.trim_leading_zeros();
        let s = if radix == 16 {
            if upper {
                hex::encode_upper(trimmed.as_bytes())
            } else {
                hex::encode(trimmed.as_bytes())
            }
        } else {
            let s = self.to_bin_string(0);
            String::from(&s[2..])
        };
        match s.find(|c| c != '0') {
            Some(i) => String::from(&s[i..]),
            None => String::from("0"),
        }
    }
}

impl FromStr for ByteVec {
    type Err = SerdeError;

    /// Same as [ByteVec::parse_literal]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ByteVec::parse_literal(s)
    }
}

impl fmt::Debug for ByteVec {
    /// Shows every byte including leading zeros
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteVec({})", self.to_hex_string(0))
    }
}

impl fmt::Display for ByteVec {
    /// Formats the decimal value
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &self.to_dec_string())
    }
}

impl fmt::LowerHex for ByteVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0x", &self.significant_digits(16, false))
    }
}

impl fmt::UpperHex for ByteVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0x", &self.significant_digits(16, true))
    }
}

impl fmt::Binary for ByteVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0b", &self.significant_digits(2, false))
    }
}
