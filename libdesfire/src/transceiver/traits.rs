// libdesfire/src/transceiver/traits.rs

use crate::error::TransportError;

/// Contract of the external proximity-coupling transceiver (the PCD
/// driver). This crate never touches registers, radio timing or
/// anti-collision itself; everything below the APDU layer goes through this
/// trait.
///
/// All operations are synchronous and blocking; retry and timeout policy
/// belongs to the implementation or the caller, never to this crate.
pub trait Transceiver {
    /// Half-duplex exchange with the currently activated card. The returned
    /// bytes have had their trailing CRC validated and removed by the
    /// transceiver; a dishonored checksum surfaces as
    /// [`TransportError::CrcMismatch`] before any decoding happens.
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>, TransportError>;

    /// Deterministic 2-byte checksum used when building request frames.
    fn calculate_checksum(&mut self, data: &[u8]) -> Result<[u8; 2], TransportError>;

    /// Deactivate the current card. Used on protocol error paths, e.g.
    /// after a failed RATS.
    fn halt_card(&mut self) -> Result<(), TransportError>;

    /// Write a raw transceiver register. Used exactly once, conditionally,
    /// after a successful PPS with parameter byte zero to disable automatic
    /// checksum framing.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError>;
}
