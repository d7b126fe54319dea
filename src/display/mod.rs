//! Bit-structure display
//!
//! Rendering of the `bitmap` bit-index table; see [`bits`].

pub mod bits;

pub use bits::{bit_display, EndianMode};
