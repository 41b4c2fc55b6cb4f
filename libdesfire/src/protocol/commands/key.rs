// libdesfire/src/protocol/commands/key.rs

/// Encode the GetKeyVersion request payload (command code 0x64):
/// the key number byte.
pub fn encode_get_key_version(key_no: u8) -> Vec<u8> {
    vec![key_no]
}
