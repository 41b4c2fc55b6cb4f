// libdesfire/src/error.rs

use crate::status::PiccStatus;
use thiserror::Error;

/// Failures reported by the external transceiver. These map 1:1 to the
/// transport half of the status taxonomy and are passed through unmodified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    #[error("communication timeout")]
    Timeout,

    #[error("received CRC does not match")]
    CrcMismatch,

    #[error("collision detected")]
    Collision,

    #[error("transceiver buffer overflow")]
    BufferOverflow,

    #[error("no room in output buffer")]
    NoRoom,

    #[error("card signalled NAK")]
    Nack,

    #[error("internal transceiver error")]
    Internal,
}

/// Common error type.
///
/// The two-level status taxonomy lives here as a tagged result:
/// `Transport` carries a transport failure (no application status exists for
/// that exchange), `Card` carries an application failure observed after a
/// successful transport exchange, and `Ok` at the call site means both
/// halves succeeded. The remaining variants are decode failures local to
/// this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("card status: {0}")]
    Card(PiccStatus),

    #[error("unexpected card status: {0}")]
    UnexpectedStatus(PiccStatus),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("request payload too large: {actual} bytes exceeds {max}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("card identifier {0} out of range (0-14)")]
    InvalidCid(u8),

    #[error("unknown file type tag: {0:#04x}")]
    UnknownFileType(u8),

    #[error("application id list length {0} is not a multiple of 3")]
    MisalignedAidList(usize),

    #[error("accumulated response exceeds capacity of {capacity} bytes")]
    NoRoom { capacity: usize },

    #[error("continuation chain exceeded {limit} exchanges")]
    ChainTooLong { limit: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
