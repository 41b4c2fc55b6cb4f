// libdesfire/src/protocol/responses/version.rs

use crate::protocol::parser;
use crate::types::VersionIdent;
use crate::Result;

/// Decode one 7-byte identity block of a GetVersion response.
/// Layout: vendor_id(1) type(1) subtype(1) major(1) minor(1)
/// storage_size(1) protocol(1)
pub fn decode_version_ident(data: &[u8]) -> Result<VersionIdent> {
    parser::ensure_len(data, 7)?;
    Ok(VersionIdent {
        vendor_id: data[0],
        product_type: data[1],
        product_subtype: data[2],
        version_major: data[3],
        version_minor: data[4],
        storage_size: data[5],
        protocol: data[6],
    })
}

/// Decode the production-info block of a GetVersion response.
/// Layout: uid(7) batch_number(5) production_week(1) production_year(1)
pub fn decode_production_info(data: &[u8]) -> Result<([u8; 7], [u8; 5], u8, u8)> {
    parser::ensure_len(data, 14)?;
    let mut uid = [0u8; 7];
    uid.copy_from_slice(parser::slice_at(data, 0, 7)?);
    let mut batch = [0u8; 5];
    batch.copy_from_slice(parser::slice_at(data, 7, 5)?);
    let week = parser::byte_at(data, 12)?;
    let year = parser::byte_at(data, 13)?;
    Ok((uid, batch, week, year))
}
