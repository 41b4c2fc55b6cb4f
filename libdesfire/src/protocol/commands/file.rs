// libdesfire/src/protocol/commands/file.rs

/// Encode the GetFileSettings request payload (command code 0xF5):
/// the file id byte.
pub fn encode_get_file_settings(file_id: u8) -> Vec<u8> {
    vec![file_id]
}
