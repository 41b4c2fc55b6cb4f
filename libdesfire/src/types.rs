// libdesfire/src/types.rs

use crate::Error;

/// AID - application identifier, newtype over 3 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid([u8; 3]);

impl Aid {
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 3 {
            return Err(Error::InvalidLength {
                expected: 3,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 3];
        arr.copy_from_slice(&bytes[..3]);
        Ok(Self(arr))
    }
}

/// File type tag, first byte of a GetFileSettings response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    StandardData,
    BackupData,
    Value,
    LinearRecord,
    CyclicRecord,
}

impl FileType {
    /// Decode a file type tag. An unrecognised tag is a decode failure, not
    /// a default variant.
    pub fn from_byte(byte: u8) -> crate::Result<Self> {
        match byte {
            0x00 => Ok(Self::StandardData),
            0x01 => Ok(Self::BackupData),
            0x02 => Ok(Self::Value),
            0x03 => Ok(Self::LinearRecord),
            0x04 => Ok(Self::CyclicRecord),
            other => Err(Error::UnknownFileType(other)),
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Self::StandardData => 0x00,
            Self::BackupData => 0x01,
            Self::Value => 0x02,
            Self::LinearRecord => 0x03,
            Self::CyclicRecord => 0x04,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StandardData => "standard data file",
            Self::BackupData => "backup data file",
            Self::Value => "value file with backup",
            Self::LinearRecord => "linear record file with backup",
            Self::CyclicRecord => "cyclic record file with backup",
        }
    }
}

/// Communication mode classification. This crate names the modes; it does
/// not implement MACed or enciphered transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommunicationMode {
    Plain,
    Maced,
    Enciphered,
}

impl CommunicationMode {
    /// Classify the low bits of a communication settings byte.
    pub fn from_settings(byte: u8) -> Option<Self> {
        match byte & 0x03 {
            0x00 => Some(Self::Plain),
            0x01 => Some(Self::Maced),
            0x03 => Some(Self::Enciphered),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Plain => "plain communication",
            Self::Maced => "plain communication secured by DES/3DES MACing",
            Self::Enciphered => "fully DES/3DES enciphered communication",
        }
    }
}

/// Type-specific tail of a GetFileSettings response. Exactly one variant is
/// populated per file; the tag is read from the wire before the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileSettingsKind {
    /// Standard or backup data file.
    Data { file_size: u32 },
    /// Value file with backup.
    Value {
        lower_limit: u32,
        upper_limit: u32,
        limited_credit_value: u32,
        limited_credit_enabled: bool,
    },
    /// Linear or cyclic record file with backup.
    Record {
        record_size: u32,
        max_records: u32,
        current_records: u32,
    },
}

/// Settings of one file inside the selected application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSettings {
    pub file_type: FileType,
    /// Raw communication settings byte; classify with
    /// [`CommunicationMode::from_settings`].
    pub communication_settings: u8,
    pub access_rights: u16,
    pub kind: FileSettingsKind,
}

/// One 7-byte identity block of a GetVersion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionIdent {
    pub vendor_id: u8,
    pub product_type: u8,
    pub product_subtype: u8,
    pub version_major: u8,
    pub version_minor: u8,
    /// Storage size exponent byte.
    pub storage_size: u8,
    pub protocol: u8,
}

/// Full GetVersion record, collected across three chained exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    pub hardware: VersionIdent,
    pub software: VersionIdent,
    pub uid: [u8; 7],
    pub batch_number: [u8; 5],
    pub production_week: u8,
    pub production_year: u8,
}

impl VersionInfo {
    pub fn uid_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.uid)
    }
}

/// GetKeySettings response record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySettings {
    pub settings: u8,
    pub max_keys: u8,
}
