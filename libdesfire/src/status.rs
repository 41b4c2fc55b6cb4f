// libdesfire/src/status.rs
//! Application-level status codes reported by the card.
//!
//! Every response frame carries one of these in its third byte. Two values
//! are non-error sentinels: [`PiccStatus::OperationOk`] and
//! [`PiccStatus::AdditionalFrame`] (more response data follows). Everything
//! else is a card-reported failure.

use std::fmt;

/// DESFire application status byte, decoded from the response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PiccStatus {
    /// Successful operation.
    OperationOk,
    /// No changes done to backup files.
    NoChanges,
    /// Insufficient NV memory to complete the command.
    OutOfEepromError,
    /// Command code not supported.
    IllegalCommandCode,
    /// CRC or MAC does not match the data.
    IntegrityError,
    /// Invalid key number specified.
    NoSuchKey,
    /// Length of the command string invalid.
    LengthError,
    /// Current configuration or status does not allow the command.
    PermissionError,
    /// Value of the parameter(s) invalid.
    ParameterError,
    /// Requested AID not present on the PICC.
    ApplicationNotFound,
    /// Unrecoverable error within the application.
    ApplIntegrityError,
    /// Current authentication status does not allow the command.
    AuthenticationError,
    /// Additional data frame to be sent.
    AdditionalFrame,
    /// Attempt to read or write beyond the file limits.
    BoundaryError,
    /// Unrecoverable error within the PICC.
    PiccIntegrityError,
    /// Previous command not fully completed.
    CommandAborted,
    /// PICC disabled by an unrecoverable error.
    PiccDisabledError,
    /// Cannot create more applications, already at the maximum.
    CountError,
    /// Cannot create a duplicate file or application.
    DuplicateError,
    /// Could not complete the NV-write operation.
    EepromError,
    /// Specified file number does not exist.
    FileNotFound,
    /// Unrecoverable error within the file.
    FileIntegrityError,
    /// A status byte this crate does not recognise.
    Unknown(u8),
}

impl PiccStatus {
    /// Decode a raw status byte.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => Self::OperationOk,
            0x0C => Self::NoChanges,
            0x0E => Self::OutOfEepromError,
            0x1C => Self::IllegalCommandCode,
            0x1E => Self::IntegrityError,
            0x40 => Self::NoSuchKey,
            0x7E => Self::LengthError,
            0x9D => Self::PermissionError,
            0x9E => Self::ParameterError,
            0xA0 => Self::ApplicationNotFound,
            0xA1 => Self::ApplIntegrityError,
            0xAE => Self::AuthenticationError,
            0xAF => Self::AdditionalFrame,
            0xBE => Self::BoundaryError,
            0xC1 => Self::PiccIntegrityError,
            0xCA => Self::CommandAborted,
            0xCD => Self::PiccDisabledError,
            0xCE => Self::CountError,
            0xDE => Self::DuplicateError,
            0xEE => Self::EepromError,
            0xF0 => Self::FileNotFound,
            0xF1 => Self::FileIntegrityError,
            other => Self::Unknown(other),
        }
    }

    /// Raw wire value of this status.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::OperationOk => 0x00,
            Self::NoChanges => 0x0C,
            Self::OutOfEepromError => 0x0E,
            Self::IllegalCommandCode => 0x1C,
            Self::IntegrityError => 0x1E,
            Self::NoSuchKey => 0x40,
            Self::LengthError => 0x7E,
            Self::PermissionError => 0x9D,
            Self::ParameterError => 0x9E,
            Self::ApplicationNotFound => 0xA0,
            Self::ApplIntegrityError => 0xA1,
            Self::AuthenticationError => 0xAE,
            Self::AdditionalFrame => 0xAF,
            Self::BoundaryError => 0xBE,
            Self::PiccIntegrityError => 0xC1,
            Self::CommandAborted => 0xCA,
            Self::PiccDisabledError => 0xCD,
            Self::CountError => 0xCE,
            Self::DuplicateError => 0xDE,
            Self::EepromError => 0xEE,
            Self::FileNotFound => 0xF0,
            Self::FileIntegrityError => 0xF1,
            Self::Unknown(b) => *b,
        }
    }

    /// Human-readable description of this status.
    pub fn description(&self) -> &'static str {
        match self {
            Self::OperationOk => "successful operation",
            Self::NoChanges => "no changes done to backup files",
            Self::OutOfEepromError => "insufficient NV memory to complete command",
            Self::IllegalCommandCode => "command code not supported",
            Self::IntegrityError => "CRC or MAC does not match data",
            Self::NoSuchKey => "invalid key number specified",
            Self::LengthError => "length of command string invalid",
            Self::PermissionError => "current configuration or status does not allow command",
            Self::ParameterError => "value of the parameter(s) invalid",
            Self::ApplicationNotFound => "requested AID not present on PICC",
            Self::ApplIntegrityError => "unrecoverable error within application",
            Self::AuthenticationError => {
                "current authentication status does not allow requested command"
            }
            Self::AdditionalFrame => "additional data frame to be sent",
            Self::BoundaryError => "attempt to read or write beyond limits",
            Self::PiccIntegrityError => "unrecoverable error within PICC",
            Self::CommandAborted => "previous command not fully completed",
            Self::PiccDisabledError => "PICC disabled by unrecoverable error",
            Self::CountError => "cannot create more applications",
            Self::DuplicateError => "cannot create duplicate file or application",
            Self::EepromError => "could not complete NV-write operation",
            Self::FileNotFound => "specified file number does not exist",
            Self::FileIntegrityError => "unrecoverable error within file",
            Self::Unknown(_) => "unknown status code",
        }
    }

    /// True only for the `OperationOk` sentinel.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::OperationOk)
    }

    /// True only for the `AdditionalFrame` continuation sentinel.
    pub fn is_additional_frame(&self) -> bool {
        matches!(self, Self::AdditionalFrame)
    }

    /// Map this status to a command-catalog result: `Ok(())` for
    /// `OperationOk`, the status wrapped in [`crate::Error::Card`]
    /// otherwise. `AdditionalFrame` is an error here: single-frame commands
    /// must not see it, and chained commands consume it before calling this.
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(crate::Error::Card(self))
        }
    }
}

impl fmt::Display for PiccStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(b) => write!(f, "{} ({:#04x})", self.description(), b),
            _ => write!(f, "{} ({:#04x})", self.description(), self.as_byte()),
        }
    }
}
