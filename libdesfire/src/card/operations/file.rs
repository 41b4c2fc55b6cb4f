// libdesfire/src/card/operations/file.rs

use crate::protocol::responses::{decode_file_ids, decode_file_settings};
use crate::protocol::Command;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::FileSettings;
use crate::Result;

/// GetFileIDs (0x6F): the file ids inside the selected application, one
/// byte each, in the card's order.
pub fn get_file_ids<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
) -> Result<Vec<u8>> {
    let (status, payload) = session.exchange(transceiver, &Command::GetFileIds)?;
    status.into_result()?;
    Ok(decode_file_ids(&payload))
}

/// GetFileSettings (0xF5) for one file of the selected application.
pub fn get_file_settings<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
    file_id: u8,
) -> Result<FileSettings> {
    let (status, payload) = session.exchange(transceiver, &Command::GetFileSettings { file_id })?;
    status.into_result()?;
    decode_file_settings(&payload)
}
