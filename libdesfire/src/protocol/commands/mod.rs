// libdesfire/src/protocol/commands/mod.rs

pub mod application;
pub mod data;
pub mod file;
pub mod key;

pub use application::encode_select_application;
pub use data::{encode_get_value, encode_read_data};
pub use file::encode_get_file_settings;
pub use key::encode_get_key_version;

use crate::constants::*;
use crate::types::Aid;

/// High-level Command enum. Commands with request parameters get a
/// per-command encoder in `protocol::commands::<topic>.rs`; the rest are
/// status-only requests with empty payloads.
#[derive(Debug, Clone)]
pub enum Command {
    GetVersion,
    /// Continuation request for a chained response.
    AdditionalFrame,
    SelectApplication {
        aid: Aid,
    },
    GetFileIds,
    GetFileSettings {
        file_id: u8,
    },
    GetKeySettings,
    GetKeyVersion {
        key_no: u8,
    },
    ReadData {
        file_id: u8,
        offset: u32,
        length: u32,
    },
    GetValue {
        file_id: u8,
    },
    GetApplicationIds,
}

impl Command {
    /// DESFire command code carried in the frame's command byte.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetVersion => CMD_GET_VERSION,
            Self::AdditionalFrame => CMD_ADDITIONAL_FRAME,
            Self::SelectApplication { .. } => CMD_SELECT_APPLICATION,
            Self::GetFileIds => CMD_GET_FILE_IDS,
            Self::GetFileSettings { .. } => CMD_GET_FILE_SETTINGS,
            Self::GetKeySettings => CMD_GET_KEY_SETTINGS,
            Self::GetKeyVersion { .. } => CMD_GET_KEY_VERSION,
            Self::ReadData { .. } => CMD_READ_DATA,
            Self::GetValue { .. } => CMD_GET_VALUE,
            Self::GetApplicationIds => CMD_GET_APPLICATION_IDS,
        }
    }

    /// Encode the request parameter payload (the bytes following the
    /// command byte in the frame; empty for parameterless commands).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetVersion
            | Self::AdditionalFrame
            | Self::GetFileIds
            | Self::GetKeySettings
            | Self::GetApplicationIds => Vec::new(),
            Self::SelectApplication { aid } => encode_select_application(*aid),
            Self::GetFileSettings { file_id } => encode_get_file_settings(*file_id),
            Self::GetKeyVersion { key_no } => encode_get_key_version(*key_no),
            Self::ReadData {
                file_id,
                offset,
                length,
            } => encode_read_data(*file_id, *offset, *length),
            Self::GetValue { file_id } => encode_get_value(*file_id),
        }
    }
}
