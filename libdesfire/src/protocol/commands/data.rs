// libdesfire/src/protocol/commands/data.rs

/// Encode the ReadData request payload (command code 0xBD):
/// file id, 24-bit little-endian offset, 24-bit little-endian length.
/// Only the low 24 bits of `offset` and `length` are representable on the
/// wire; higher bits are discarded.
pub fn encode_read_data(file_id: u8, offset: u32, length: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(file_id);
    buf.extend_from_slice(&offset.to_le_bytes()[..3]);
    buf.extend_from_slice(&length.to_le_bytes()[..3]);
    buf
}

/// Encode the GetValue request payload (command code 0x6C):
/// the file id byte.
pub fn encode_get_value(file_id: u8) -> Vec<u8> {
    vec![file_id]
}
