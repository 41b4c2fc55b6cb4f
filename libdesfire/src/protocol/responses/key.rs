// libdesfire/src/protocol/responses/key.rs

use crate::protocol::parser;
use crate::types::KeySettings;
use crate::Result;

/// Decode a GetKeySettings response payload.
/// Layout: settings(1) max_keys(1)
pub fn decode_key_settings(data: &[u8]) -> Result<KeySettings> {
    parser::ensure_len(data, 2)?;
    Ok(KeySettings {
        settings: data[0],
        max_keys: data[1],
    })
}

/// Decode a GetKeyVersion response payload: a single version byte.
pub fn decode_key_version(data: &[u8]) -> Result<u8> {
    parser::byte_at(data, 0)
}
