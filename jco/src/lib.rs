//! This crate compiles all the interfaces of `jco_core` and, with the `std`
//! feature, `jco_table`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use jco_core::prelude::*;
#[cfg(feature = "std")]
pub use jco_table::{
    normalize, render, Normalized, Rendered, Row, Table, TableConfig, HEADER, LOSS_MARKER,
    N_COLUMNS, PADDING,
};

pub mod prelude {
    pub use crate::*;
}
