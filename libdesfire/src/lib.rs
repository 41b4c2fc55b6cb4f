// libdesfire/src/lib.rs

//! libdesfire
//!
//! Pure Rust MIFARE DESFire command layer for ISO 14443-4 transceivers.
//!
//! This crate builds and parses DESFire APDU blocks, drives the half-duplex
//! block exchange (including multi-frame continuation) against an external
//! [`transceiver::Transceiver`], and classifies every outcome into the
//! two-level transport/application status taxonomy. Radio control,
//! anti-collision and cryptographic session modes stay outside: they belong
//! to the transceiver driver and to the card, not to this layer.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod status;
pub mod test_support;
pub mod transceiver;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::status::PiccStatus;
pub use crate::types::*;

pub use prelude::*;
