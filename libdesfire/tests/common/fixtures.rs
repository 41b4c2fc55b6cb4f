//! Shared fixtures for integration tests.
#![allow(dead_code)]

use libdesfire::status::PiccStatus;
use libdesfire::test_support::response_frame;
use libdesfire::types::Aid;

pub fn sample_aid() -> Aid {
    Aid::from_bytes([0x01, 0x02, 0x03])
}

/// A plausible hardware identity block: NXP vendor, DESFire EV1 style.
pub fn hardware_ident_block() -> Vec<u8> {
    vec![0x04, 0x01, 0x01, 0x01, 0x00, 0x1A, 0x05]
}

pub fn software_ident_block() -> Vec<u8> {
    vec![0x04, 0x01, 0x01, 0x01, 0x04, 0x1A, 0x05]
}

pub fn production_block() -> Vec<u8> {
    let mut block = hex::decode("04512a1b603d80").unwrap(); // uid
    block.extend_from_slice(&hex::decode("ba12345678").unwrap()); // batch
    block.push(0x12); // production week
    block.push(0x16); // production year
    block
}

/// The three transceiver responses of a complete GetVersion conversation.
pub fn version_conversation() -> Vec<Vec<u8>> {
    vec![
        response_frame(PiccStatus::AdditionalFrame, &hardware_ident_block()),
        response_frame(PiccStatus::AdditionalFrame, &software_ident_block()),
        response_frame(PiccStatus::OperationOk, &production_block()),
    ]
}

/// GetFileSettings payload describing a 256-byte standard data file with
/// plain communication and free access.
pub fn standard_file_settings_payload() -> Vec<u8> {
    vec![0x00, 0x00, 0xEE, 0xEE, 0x00, 0x01, 0x00]
}

/// GetFileSettings payload describing a value file.
pub fn value_file_settings_payload() -> Vec<u8> {
    let mut p = vec![0x02, 0x01, 0x00, 0xEE];
    p.extend_from_slice(&0u32.to_le_bytes()); // lower limit
    p.extend_from_slice(&10_000u32.to_le_bytes()); // upper limit
    p.extend_from_slice(&100u32.to_le_bytes()); // limited credit value
    p.push(0x00); // limited credit disabled
    p
}
