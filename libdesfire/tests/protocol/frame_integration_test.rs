use libdesfire::protocol::Frame;
use libdesfire::status::PiccStatus;
use libdesfire::transceiver::crc_a;
use proptest::prelude::*;

#[test]
fn request_frame_matches_reference_layout() {
    // SelectApplication for AID 01 02 03 from a fresh session:
    // PCB 0x0A, CID 0, command 0x5A, AID bytes, CRC_A.
    let body = Frame::request_body(0x0A, 0x00, 0x5A, &[0x01, 0x02, 0x03]).unwrap();
    let frame = Frame::encode_request(0x0A, 0x00, 0x5A, &[0x01, 0x02, 0x03], crc_a(&body)).unwrap();
    assert_eq!(&frame[..6], &[0x0A, 0x00, 0x5A, 0x01, 0x02, 0x03]);
    assert_eq!(frame.len(), 8);
}

#[test]
fn echoed_request_decodes_to_status_and_payload() {
    // A synthetic echo transceiver mirrors the request body back; the
    // command byte position is read as the application status.
    let body = Frame::request_body(0x0A, 0x00, 0x00, &[0xDE, 0xAD]).unwrap();
    let (status, payload) = Frame::decode_response(&body).unwrap();
    assert_eq!(status, PiccStatus::OperationOk);
    assert_eq!(payload, vec![0xDE, 0xAD]);
}

proptest! {
    // Round-trip over the echo path for every supported command code and
    // any payload that fits one frame.
    #[test]
    fn echo_roundtrip_recovers_command_and_payload(
        cmd in prop::sample::select(vec![0x60u8, 0xAF, 0x5A, 0x6F, 0xF5, 0x45, 0x64, 0xBD, 0x6C, 0x6A]),
        payload in prop::collection::vec(any::<u8>(), 0..59),
    ) {
        let body = Frame::request_body(0x0A, 0x01, cmd, &payload).unwrap();
        prop_assert_eq!(body[2], cmd);
        let (status, decoded) = Frame::decode_response(&body).unwrap();
        prop_assert_eq!(status.as_byte(), cmd);
        prop_assert_eq!(decoded, payload);
    }
}
