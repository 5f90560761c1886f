use alloc::format;
use core::fmt;

use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{ByteVec, PadLimit};

/// A `serde_support` impl
impl Serialize for ByteVec {
    /// Serializes `self` in a platform independent way. In human readable form,
    /// it serializes into a struct named "ByteVec" with two fields "len" and
    /// "bits". "len" is the number of bytes including leading zeros, and "bits"
    /// is the value as an unsigned hexadecimal string without leading zeros,
    /// which is what `format!("{:x}", self)` produces.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "ByteVec".
    /// use jco_core::ByteVec;
    /// use ron::to_string;
    ///
    /// let x = ByteVec::from([0x00, 0x01, 0xff]);
    /// assert_eq!(to_string(&x).unwrap(), "(len:3,bits:\"1ff\")");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let str_buf: &str = &format!("{self:x}");
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("ByteVec", 2)?;
            s.serialize_field("len", &self.len())?;
            s.serialize_field("bits", str_buf)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.len())?;
            s.serialize_element(str_buf)?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["len", "bits"];

/// Helper for the deserialization impl
enum Field {
    Len,
    Bits,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`len` or `bits`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "len" => Ok(Field::Len),
                    "bits" => Ok(Field::Bits),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Rebuilds a `ByteVec` of exactly `len` bytes from hexadecimal `bits`. At
/// most `PadLimit::DEFAULT` leading zero bytes are accepted.
fn from_len_and_bits<E: de::Error>(len: usize, bits: &str) -> Result<ByteVec, E> {
    let x = ByteVec::from_str_radix(bits, 16).map_err(de::Error::custom)?;
    if x.len() > len {
        return Err(de::Error::custom(format!(
            "`bits` needs {} bytes but `len` is {len}",
            x.len()
        )))
    }
    let pad = len - x.len();
    if PadLimit::DEFAULT.is_capped(pad) {
        return Err(de::Error::custom(format!(
            "`len` of {len} needs {pad} leading zero bytes, more than the limit of {}",
            PadLimit::DEFAULT.get()
        )))
    }
    Ok(x.prepend_zeros(pad, PadLimit::DEFAULT))
}

struct ByteVecVisitor;

impl<'de> Visitor<'de> for ByteVecVisitor {
    type Value = ByteVec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct ByteVec consisting of a decimal byte length \"len\" and a hexadecimal \
             unsigned integer \"bits\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<ByteVec, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut len: Option<usize> = None;
        let mut bits: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Len => {
                    if len.is_some() {
                        return Err(de::Error::duplicate_field("len"))
                    }
                    len = Some(map.next_value()?);
                }
                Field::Bits => {
                    if bits.is_some() {
                        return Err(de::Error::duplicate_field("bits"))
                    }
                    bits = Some(map.next_value()?);
                }
            }
        }
        let len = len.ok_or_else(|| de::Error::missing_field("len"))?;
        let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
        from_len_and_bits(len, bits)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<ByteVec, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let len: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let bits: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        from_len_and_bits(len, bits)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for ByteVec {
    /// Deserializes `self` in a platform independent way. A "len" that would
    /// need more than `PadLimit::DEFAULT` bytes of zero padding is rejected.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "ByteVec".
    /// use jco_core::ByteVec;
    /// use ron::from_str;
    ///
    /// let x: ByteVec = from_str("(len:3,bits:\"1ff\")").unwrap();
    /// assert_eq!(x, [0x00, 0x01, 0xff]);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("ByteVec", FIELDS, ByteVecVisitor)
    }
}
