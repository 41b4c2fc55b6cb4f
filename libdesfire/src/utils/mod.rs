// libdesfire/src/utils/mod.rs
//! Small shared helpers.

mod hex;

pub use hex::{bytes_to_hex, bytes_to_hex_spaced};
