mod byte_vec;
#[cfg(feature = "serde_support")]
mod serde;
mod traits;

pub use byte_vec::ByteVec;
