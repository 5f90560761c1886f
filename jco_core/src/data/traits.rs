use alloc::vec::Vec;
use core::ops::Deref;

use crate::ByteVec;

impl Deref for ByteVec {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteVec {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for ByteVec {
    /// Takes ownership of big endian `bytes` without copying
    fn from(bytes: Vec<u8>) -> Self {
        ByteVec::from_raw(bytes)
    }
}

impl From<&[u8]> for ByteVec {
    /// Copies big endian `bytes`
    fn from(bytes: &[u8]) -> Self {
        bytes.iter().copied().collect()
    }
}

impl<const N: usize> From<[u8; N]> for ByteVec {
    /// Copies big endian `bytes`, keeping any leading zeros
    fn from(bytes: [u8; N]) -> Self {
        bytes.into_iter().collect()
    }
}

impl From<u64> for ByteVec {
    /// Same as [ByteVec::from_u64]
    fn from(x: u64) -> Self {
        ByteVec::from_u64(x)
    }
}

impl From<ByteVec> for Vec<u8> {
    fn from(x: ByteVec) -> Self {
        x.into_vec()
    }
}

impl FromIterator<u8> for ByteVec {
    /// Collects bytes in big endian order
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        ByteVec::from_raw(iter.into_iter().collect())
    }
}

impl PartialEq<[u8]> for ByteVec {
    fn eq(&self, rhs: &[u8]) -> bool {
        self.as_bytes() == rhs
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteVec {
    fn eq(&self, rhs: &[u8; N]) -> bool {
        self.as_bytes() == rhs
    }
}
