// libdesfire/src/prelude.rs
//! Convenience re-exports of the types and procedures most callers need.

pub use crate::card::{
    get_application_ids, get_file_ids, get_file_settings, get_key_settings, get_key_version,
    get_value, get_version, read_data, select_application,
};
pub use crate::protocol::Command;
pub use crate::session::{activate, request_ats, select_protocol_parameters, TagSession};
pub use crate::status::PiccStatus;
pub use crate::transceiver::{MockTransceiver, Transceiver};
pub use crate::{
    Aid, CommunicationMode, Error, FileSettings, FileSettingsKind, FileType, KeySettings, Result,
    TransportError, VersionInfo,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
