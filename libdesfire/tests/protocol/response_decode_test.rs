use super::common::fixtures;
use libdesfire::protocol::responses::{
    decode_application_ids, decode_file_settings, decode_key_settings, decode_production_info,
    decode_value, decode_version_ident,
};
use libdesfire::types::{CommunicationMode, FileSettingsKind, FileType};
use libdesfire::Error;
use proptest::prelude::*;

#[test]
fn version_blocks_decode() {
    let hw = decode_version_ident(&fixtures::hardware_ident_block()).unwrap();
    assert_eq!(hw.vendor_id, 0x04);
    assert_eq!(hw.storage_size, 0x1A);

    let (uid, batch, week, year) = decode_production_info(&fixtures::production_block()).unwrap();
    assert_eq!(uid.len(), 7);
    assert_eq!(batch, [0xBA, 0x12, 0x34, 0x56, 0x78]);
    assert_eq!(week, 0x12);
    assert_eq!(year, 0x16);
}

#[test]
fn value_file_settings_decode() {
    let settings = decode_file_settings(&fixtures::value_file_settings_payload()).unwrap();
    assert_eq!(settings.file_type, FileType::Value);
    assert_eq!(
        CommunicationMode::from_settings(settings.communication_settings),
        Some(CommunicationMode::Maced)
    );
    assert_eq!(settings.access_rights, 0xEE00);
    match settings.kind {
        FileSettingsKind::Value {
            upper_limit,
            limited_credit_enabled,
            ..
        } => {
            assert_eq!(upper_limit, 10_000);
            assert!(!limited_credit_enabled);
        }
        other => panic!("expected value settings, got {:?}", other),
    }
}

#[test]
fn key_settings_reference_bytes() {
    let settings = decode_key_settings(&[0x0F, 0x02]).unwrap();
    assert_eq!(settings.settings, 0x0F);
    assert_eq!(settings.max_keys, 2);
}

#[test]
fn value_reference_bytes() {
    assert_eq!(decode_value(&[0x10, 0x00, 0x00, 0x00]).unwrap(), 16);
}

#[test]
fn misaligned_aid_list_rejected() {
    match decode_application_ids(&[0x01, 0x02, 0x03, 0x04, 0x05]) {
        Err(Error::MisalignedAidList(5)) => {}
        other => panic!("expected MisalignedAidList, got {:?}", other),
    }
}

proptest! {
    // Decoders must return Err on malformed input, never panic.
    #[test]
    fn decoders_never_panic(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        use std::panic::{catch_unwind, AssertUnwindSafe};
        let res = catch_unwind(AssertUnwindSafe(|| {
            let _ = decode_version_ident(&payload);
            let _ = decode_production_info(&payload);
            let _ = decode_file_settings(&payload);
            let _ = decode_key_settings(&payload);
            let _ = decode_value(&payload);
            let _ = decode_application_ids(&payload);
        }));
        prop_assert!(res.is_ok());
    }
}
