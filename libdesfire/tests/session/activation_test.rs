use libdesfire::constants::{REG_RX_MODE, REG_TX_MODE};
use libdesfire::session::{activate, request_ats, select_protocol_parameters};
use libdesfire::transceiver::{crc_a, MockTransceiver};
use libdesfire::{Error, TransportError};

#[test]
fn rats_then_pps_yields_ready_session() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x06, 0x75, 0x77, 0x81, 0x02, 0x80]); // ATS
    mock.push_response(vec![0xD0]); // PPS echo

    let session = activate(&mut mock, 0).unwrap();
    assert_eq!(session.cid(), 0);

    // RATS first, with the reference parameter byte and CRC_A.
    assert_eq!(&mock.sent[0][..2], &[0xE0, 0x50]);
    assert_eq!(&mock.sent[0][2..], &crc_a(&[0xE0, 0x50]));
    // PPS second.
    assert_eq!(&mock.sent[1][..3], &[0xD0, 0x11, 0x00]);
    // PPS1 = 0 switched off automatic CRC framing.
    assert_eq!(
        mock.register_writes,
        vec![(REG_TX_MODE, 0x00), (REG_RX_MODE, 0x00)]
    );
}

#[test]
fn failed_rats_halts_the_card() {
    let mut mock = MockTransceiver::new();
    mock.push_transport_error(TransportError::Timeout);

    assert!(matches!(
        request_ats(&mut mock, 0),
        Err(Error::Transport(TransportError::Timeout))
    ));
    assert!(mock.halted);
}

#[test]
fn pps_failure_stops_activation_before_register_writes() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x06, 0x75]); // ATS ok
    mock.push_transport_error(TransportError::Nack); // PPS refused

    assert!(activate(&mut mock, 0).is_err());
    assert!(mock.register_writes.is_empty());
}

#[test]
fn nonzero_pps1_keeps_hardware_crc() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0xD4]);

    select_protocol_parameters(&mut mock, 4, 0x11, 0x05).unwrap();
    assert!(mock.register_writes.is_empty());
    assert_eq!(mock.sent[0][0], 0xD4);
}
