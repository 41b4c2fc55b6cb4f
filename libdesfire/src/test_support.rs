//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize common MockTransceiver setup so tests across the crate
//! and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::PCB_BLOCK_EVEN;
use crate::session::TagSession;
use crate::status::PiccStatus;
use crate::transceiver::MockTransceiver;

/// Build a response as the transceiver hands it up: PCB echo, CID echo,
/// status byte, payload - with the trailing CRC already stripped.
#[doc(hidden)]
pub fn response_frame(status: PiccStatus, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![PCB_BLOCK_EVEN, 0x00, status.as_byte()];
    frame.extend_from_slice(payload);
    frame
}

/// Fresh cid-0 session plus an empty mock, the starting point of most
/// catalog tests.
#[doc(hidden)]
pub fn session_and_mock() -> (TagSession, MockTransceiver) {
    let session = TagSession::new(0).expect("cid 0 is always valid");
    (session, MockTransceiver::new())
}

/// Mock pre-seeded with framed `(status, payload)` responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: &[(PiccStatus, &[u8])]) -> MockTransceiver {
    let mut mock = MockTransceiver::new();
    for (status, payload) in responses {
        mock.push_response(response_frame(*status, payload));
    }
    mock
}
