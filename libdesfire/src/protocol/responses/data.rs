// libdesfire/src/protocol/responses/data.rs

use crate::protocol::parser;
use crate::Result;

/// Decode a GetValue response payload: a signed 32-bit little-endian value.
pub fn decode_value(data: &[u8]) -> Result<i32> {
    parser::le_i32_at(data, 0)
}
