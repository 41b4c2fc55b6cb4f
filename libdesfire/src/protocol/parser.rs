// libdesfire/src/protocol/parser.rs

use crate::types::Aid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u16 at `idx` with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Read a little-endian 24-bit integer at `idx` with bounds checking.
/// DESFire encodes file sizes and record counts as 3-byte values.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 3)?;
    Ok(u32::from_le_bytes([data[idx], data[idx + 1], data[idx + 2], 0]))
}

/// Read a little-endian u32 at `idx` with bounds checking.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 4)?;
    Ok(u32::from_le_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Read a little-endian i32 at `idx` with bounds checking.
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    Ok(le_u32_at(data, idx)? as i32)
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse an Aid (3 bytes) at `start` with bounds checking.
pub fn aid_at(data: &[u8], start: usize) -> Result<Aid> {
    let s = slice_at(data, start, 3)?;
    Aid::try_from(s)
}
