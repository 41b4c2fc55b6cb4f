// libdesfire/src/card/operations/key.rs

use crate::protocol::responses::{decode_key_settings, decode_key_version};
use crate::protocol::Command;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::KeySettings;
use crate::Result;

/// GetKeySettings (0x45) for the selected application (or the card level
/// when no application is selected).
pub fn get_key_settings<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
) -> Result<KeySettings> {
    let (status, payload) = session.exchange(transceiver, &Command::GetKeySettings)?;
    status.into_result()?;
    decode_key_settings(&payload)
}

/// GetKeyVersion (0x64) for one key of the selected application.
pub fn get_key_version<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
    key_no: u8,
) -> Result<u8> {
    let (status, payload) = session.exchange(transceiver, &Command::GetKeyVersion { key_no })?;
    status.into_result()?;
    decode_key_version(&payload)
}
