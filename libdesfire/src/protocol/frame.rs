// libdesfire/src/protocol/frame.rs

use crate::constants::{FRAME_OVERHEAD, MAX_FRAME_LEN, RESPONSE_HEADER_LEN};
use crate::protocol::parser;
use crate::status::PiccStatus;
use crate::{Error, Result};

/// DESFire APDU block helper, ISO 14443-4 block format:
///
/// ```text
/// |-----|-----|---------|------|----------|
/// | PCB | CID | Command | Data | Checksum |
/// |-----|-----|---------|------|----------|
/// ```
///
/// The 2-byte checksum is computed by the transceiver's CRC primitive over
/// everything before it; this layer never validates checksums itself. On the
/// receive side the transceiver strips and verifies the trailing CRC before
/// the bytes reach [`Frame::decode_response`].
pub struct Frame;

impl Frame {
    /// Build the request body `[pcb, cid, command, payload...]` without the
    /// trailing checksum, so the caller can feed it to the transceiver's CRC
    /// primitive. Payloads that would overflow the frame cap are a caller
    /// error; nothing is auto-chunked on the request side.
    pub fn request_body(pcb: u8, cid: u8, command: u8, payload: &[u8]) -> Result<Vec<u8>> {
        let max_payload = MAX_FRAME_LEN - FRAME_OVERHEAD;
        if payload.len() > max_payload {
            return Err(Error::PayloadTooLarge {
                max: max_payload,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(3 + payload.len() + 2);
        out.push(pcb);
        out.push(cid);
        out.push(command);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Build a complete request frame from a pre-computed checksum.
    pub fn encode_request(
        pcb: u8,
        cid: u8,
        command: u8,
        payload: &[u8],
        checksum: [u8; 2],
    ) -> Result<Vec<u8>> {
        let mut out = Self::request_body(pcb, cid, command, payload)?;
        out.extend_from_slice(&checksum);
        Ok(out)
    }

    /// Strip the PCB/CID echo from a response, read the application status
    /// byte, and return the remaining bytes as the payload. A status-only
    /// response (empty payload) is legal.
    pub fn decode_response(frame: &[u8]) -> Result<(PiccStatus, Vec<u8>)> {
        parser::ensure_len(frame, RESPONSE_HEADER_LEN)?;
        let status = PiccStatus::from_byte(frame[2]);
        Ok((status, frame[RESPONSE_HEADER_LEN..].to_vec()))
    }
}
