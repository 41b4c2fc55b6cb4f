use libdesfire::protocol::Command;
use libdesfire::types::Aid;

#[test]
fn select_application_payload_is_the_aid() {
    let cmd = Command::SelectApplication {
        aid: Aid::from_bytes([0xAA, 0xBB, 0xCC]),
    };
    assert_eq!(cmd.command_code(), 0x5A);
    assert_eq!(cmd.encode(), vec![0xAA, 0xBB, 0xCC]);
}

#[test]
fn read_data_payload_uses_24_bit_le_fields() {
    let cmd = Command::ReadData {
        file_id: 0x01,
        offset: 0x0001_02FF,
        length: 0x0000_0040,
    };
    assert_eq!(cmd.command_code(), 0xBD);
    // fid, offset LE24, length LE24. The offset low byte keeps all 8 bits;
    // bits above 24 are not representable and fall away.
    assert_eq!(cmd.encode(), vec![0x01, 0xFF, 0x02, 0x01, 0x40, 0x00, 0x00]);
}

#[test]
fn single_byte_parameter_commands() {
    assert_eq!(Command::GetFileSettings { file_id: 0x05 }.encode(), vec![0x05]);
    assert_eq!(Command::GetKeyVersion { key_no: 0x0D }.encode(), vec![0x0D]);
    assert_eq!(Command::GetValue { file_id: 0x02 }.encode(), vec![0x02]);
}

#[test]
fn continuation_command_is_bare_af() {
    let cmd = Command::AdditionalFrame;
    assert_eq!(cmd.command_code(), 0xAF);
    assert!(cmd.encode().is_empty());
}
