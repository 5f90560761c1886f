//! Report tables for `jco`
//!
//! This crate sits on top of `jco_core` and turns byte-vectors into rows of a
//! table under a declared bitwidth. Every value, whatever its length, is
//! normalized to the declared width in bytes by zero padding or by wrapping
//! truncation, and rendered in decimal, hexadecimal, and binary. When the
//! truncation changed the value, all three columns get a leading `*`
//! loss-of-precision marker.
//!
//! ```
//! use jco_core::ByteVec;
//! use jco_table::{Table, TableConfig};
//!
//! let mut table = Table::new(TableConfig::new(24));
//! table.two(
//!     &ByteVec::parse_literal("0x4aefae").unwrap(),
//!     &ByteVec::parse_literal("0x0c").unwrap(),
//!     "a",
//!     "b",
//! );
//! let sum = &table.rows()[2];
//! assert_eq!(sum.label, "a  + b");
//! assert_eq!(sum.cells.hex, "0x4aefba");
//! assert!(!sum.cells.lossy);
//! ```

mod normalize;
mod reports;
mod table;

pub use jco_core;
pub use normalize::{normalize, render, Normalized, Rendered, LOSS_MARKER};
pub use table::{Row, Table, TableConfig, HEADER, N_COLUMNS, PADDING};
