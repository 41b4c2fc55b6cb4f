// libdesfire/src/protocol/responses/file.rs

use crate::protocol::parser;
use crate::types::{FileSettings, FileSettingsKind, FileType};
use crate::Result;

/// Decode a GetFileIDs response payload: one byte per file id, count equals
/// the payload length. An empty payload means no files.
pub fn decode_file_ids(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}

/// Decode a GetFileSettings response payload.
/// Layout: type(1) communication_settings(1) access_rights(2, LE) +
/// type-specific tail. The type tag is read before the tail; an unknown tag
/// fails the decode without populating any variant.
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    let file_type = FileType::from_byte(parser::byte_at(data, 0)?)?;
    let communication_settings = parser::byte_at(data, 1)?;
    let access_rights = parser::le_u16_at(data, 2)?;

    let kind = match file_type {
        FileType::StandardData | FileType::BackupData => FileSettingsKind::Data {
            file_size: parser::le_u24_at(data, 4)?,
        },
        FileType::Value => FileSettingsKind::Value {
            lower_limit: parser::le_u32_at(data, 4)?,
            upper_limit: parser::le_u32_at(data, 8)?,
            limited_credit_value: parser::le_u32_at(data, 12)?,
            limited_credit_enabled: parser::byte_at(data, 16)? != 0,
        },
        FileType::LinearRecord | FileType::CyclicRecord => FileSettingsKind::Record {
            record_size: parser::le_u24_at(data, 4)?,
            max_records: parser::le_u24_at(data, 7)?,
            current_records: parser::le_u24_at(data, 10)?,
        },
    };

    Ok(FileSettings {
        file_type,
        communication_settings,
        access_rights,
        kind,
    })
}
