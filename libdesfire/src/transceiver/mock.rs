// libdesfire/src/transceiver/mock.rs

use crate::error::TransportError;
use crate::transceiver::traits::Transceiver;

/// Software ISO 14443-A CRC_A, the checksum a real PCD computes in
/// hardware: polynomial 0x8408 (reflected 0x1021), initial value 0x6363,
/// little-endian result.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &byte in data {
        let mut b = byte ^ (crc as u8);
        b ^= b << 4;
        crc = (crc >> 8) ^ (u16::from(b) << 8) ^ (u16::from(b) << 3) ^ (u16::from(b) >> 4);
    }
    crc.to_le_bytes()
}

/// Mock transceiver for unit and integration tests. Records every
/// transmitted frame and register write, and replays queued responses.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Frames passed to `transceive`, including the appended checksum.
    pub sent: Vec<Vec<u8>>,
    /// Queued `transceive` outcomes, consumed front to back.
    pub responses: Vec<Result<Vec<u8>, TransportError>>,
    /// Recorded `write_register` calls as (register, value).
    pub register_writes: Vec<(u8, u8)>,
    /// Whether `halt_card` has been called.
    pub halted: bool,
    /// Testing hook: number of upcoming `calculate_checksum` calls that
    /// should fail.
    checksum_failures: usize,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response (header + payload, CRC already
    /// stripped, as the trait contract specifies).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a transport-level failure for the next `transceive`.
    pub fn push_transport_error(&mut self, err: TransportError) {
        self.responses.push(Err(err));
    }

    /// Make the next `n` checksum calculations fail.
    pub fn set_checksum_failures(&mut self, n: usize) {
        self.checksum_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransceiver {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.sent.push(frame.to_vec());
        if self.responses.is_empty() {
            Err(TransportError::Timeout)
        } else {
            self.responses.remove(0)
        }
    }

    fn calculate_checksum(&mut self, data: &[u8]) -> Result<[u8; 2], TransportError> {
        if self.checksum_failures > 0 {
            self.checksum_failures -= 1;
            return Err(TransportError::Internal);
        }
        Ok(crc_a(data))
    }

    fn halt_card(&mut self) -> Result<(), TransportError> {
        self.halted = true;
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError> {
        self.register_writes.push((register, value));
        Ok(())
    }
}
