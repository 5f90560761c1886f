use jco_core::{ByteVec, PadLimit};

/// Prefixed to every rendered column of a value that was changed by
/// truncation to the declared width
pub const LOSS_MARKER: char = '*';

/// A value reduced to a declared width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Exactly the declared number of bytes, unless the padding was capped by
    /// a `PadLimit`
    pub bytes: ByteVec,
    /// If the truncation changed the represented value
    pub lossy: bool,
}

/// The three textual columns of a value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Rendered {
    pub dec: String,
    pub hex: String,
    pub bin: String,
    pub lossy: bool,
}

/// Normalizes `value` to `width` bytes.
///
/// A shorter `value` is zero padded (with at most `limit` bytes of padding),
/// then the last `width` bytes are kept. This truncation is a wrapping
/// modulo `2^(8 * width)` reduction, and `lossy` is set if the result is not
/// [equivalent](ByteVec::equivalent) to `value`.
pub fn normalize(value: &ByteVec, width: usize, limit: PadLimit) -> Normalized {
    let padded = if value.len() < width {
        value.prepend_zeros(width - value.len(), limit)
    } else {
        value.clone()
    };
    let bytes = padded.truncate(width);
    let lossy = !bytes.equivalent(value);
    Normalized { bytes, lossy }
}

/// Normalizes `value` to `width` bytes and renders it in decimal, `0x`
/// hexadecimal with `2 * width` digits, and `0b` binary with `8 * width`
/// digits. If the padding was capped by `limit`, the hexadecimal and binary
/// columns only cover the normalized bytes. If the normalization lost
/// information, every column is prefixed with [LOSS_MARKER].
pub fn render(value: &ByteVec, width: usize, limit: PadLimit) -> Rendered {
    let Normalized { bytes, lossy } = normalize(value, width, limit);
    let mut dec = bytes.to_dec_string();
    // `bytes` is already as wide as `limit` allows
    let mut hex = bytes.to_hex_string(bytes.len());
    let mut bin = bytes.to_bin_string(bytes.len());
    if lossy {
        dec.insert(0, LOSS_MARKER);
        hex.insert(0, LOSS_MARKER);
        bin.insert(0, LOSS_MARKER);
    }
    Rendered {
        dec,
        hex,
        bin,
        lossy,
    }
}
