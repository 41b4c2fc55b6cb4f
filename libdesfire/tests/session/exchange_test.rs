use libdesfire::constants::{PCB_BLOCK_EVEN, PCB_BLOCK_ODD};
use libdesfire::protocol::Command;
use libdesfire::session::TagSession;
use libdesfire::status::PiccStatus;
use libdesfire::test_support::response_frame;
use libdesfire::transceiver::{crc_a, MockTransceiver};
use libdesfire::{Error, TransportError};

#[test]
fn pcb_strictly_alternates_across_all_outcomes() {
    let mut session = TagSession::new(0).unwrap();
    let mut mock = MockTransceiver::new();
    mock.push_response(response_frame(PiccStatus::OperationOk, &[]));
    mock.push_response(response_frame(PiccStatus::PermissionError, &[]));
    mock.push_transport_error(TransportError::Collision);
    mock.push_response(response_frame(PiccStatus::AdditionalFrame, &[0x01]));

    let mut observed = vec![session.pcb()];
    for _ in 0..4 {
        let _ = session.exchange(&mut mock, &Command::GetFileIds);
        observed.push(session.pcb());
    }

    assert_eq!(
        observed,
        vec![
            PCB_BLOCK_EVEN,
            PCB_BLOCK_ODD,
            PCB_BLOCK_EVEN,
            PCB_BLOCK_ODD,
            PCB_BLOCK_EVEN,
        ]
    );

    // The transmitted frames carried the alternating values too (the
    // transport-failed attempt still consumed its slot).
    let sent_pcbs: Vec<u8> = mock.sent.iter().map(|f| f[0]).collect();
    assert_eq!(
        sent_pcbs,
        vec![PCB_BLOCK_EVEN, PCB_BLOCK_ODD, PCB_BLOCK_EVEN, PCB_BLOCK_ODD]
    );
}

#[test]
fn frame_carries_session_cid_and_transceiver_checksum() {
    let mut session = TagSession::new(7).unwrap();
    let mut mock = MockTransceiver::new();
    mock.push_response(response_frame(PiccStatus::OperationOk, &[0x0F, 0x02]));

    session.exchange(&mut mock, &Command::GetKeySettings).unwrap();

    let sent = mock.pop_sent().unwrap();
    assert_eq!(sent[1], 7);
    assert_eq!(sent[2], 0x45);
    let body_len = sent.len() - 2;
    assert_eq!(&sent[body_len..], &crc_a(&sent[..body_len]));
}

#[test]
fn oversized_request_payload_is_a_caller_error() {
    let mut session = TagSession::new(0).unwrap();
    let mut mock = MockTransceiver::new();

    // ReadData's fixed 7-byte payload always fits; drive the cap through
    // the raw frame path instead via a chained command with a large
    // capacity, by checking Frame's own limit.
    let too_big = vec![0u8; 60];
    let result = libdesfire::protocol::Frame::request_body(session.pcb(), 0, 0xBD, &too_big);
    assert!(matches!(result, Err(Error::PayloadTooLarge { .. })));

    // Nothing reached the wire and the session is still usable.
    assert!(mock.sent.is_empty());
    mock.push_response(response_frame(PiccStatus::OperationOk, &[]));
    assert!(session.exchange(&mut mock, &Command::GetFileIds).is_ok());
}

#[test]
fn chained_exchange_returns_terminating_status() {
    let mut session = TagSession::new(0).unwrap();
    let mut mock = MockTransceiver::new();
    mock.push_response(response_frame(PiccStatus::AdditionalFrame, &[0x01, 0x02, 0x03]));
    mock.push_response(response_frame(PiccStatus::AuthenticationError, &[]));

    let (status, data) = session
        .exchange_chained(&mut mock, &Command::GetApplicationIds, 84)
        .unwrap();
    assert_eq!(status, PiccStatus::AuthenticationError);
    assert_eq!(data, vec![0x01, 0x02, 0x03]);
}
