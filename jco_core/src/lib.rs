//! Byte-vector arithmetic library
//!
//! This is the core library of the `jco` system of crates. It supplies the
//! [ByteVec] type, an owned big-endian unsigned integer of arbitrary length,
//! together with the operations that the `jco` report tables are computed
//! from: zero padding and truncation, magnitude comparison, addition and
//! wrapping subtraction, two's complement, bitwise operations, population and
//! leading zero counts, bit-widths, shifts, and several canonical byte and bit
//! reorderings.
//!
//! Every operation is a pure function. It reads its inputs and returns a
//! freshly allocated `ByteVec`, and no function in this crate panics on any
//! input. The only fallible functions are the string parsers, which return a
//! [SerdeError].
//!
//! ```
//! use jco_core::ByteVec;
//!
//! let a = ByteVec::from([0x4a, 0xef, 0xae]);
//! let b = ByteVec::from([0x0c]);
//! assert_eq!(a.add(&b), ByteVec::from([0x4a, 0xef, 0xba]));
//! assert_eq!(a.subtract(&b), ByteVec::from([0x4a, 0xef, 0xa2]));
//! assert_eq!(a.and(&b), ByteVec::from([0x00, 0x00, 0x0c]));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
// the pure operations deliberately share names with `core::ops` traits
#![allow(clippy::should_implement_trait)]

extern crate alloc;

#[doc(hidden)]
pub use jco_internals;
pub use jco_internals::{PadLimit, SerdeError};

pub(crate) mod data;
pub use data::ByteVec;

mod logic;
pub use logic::BitwiseOp;

pub mod prelude {
    pub use crate::{BitwiseOp, ByteVec, PadLimit, SerdeError};
}
