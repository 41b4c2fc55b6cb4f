// libdesfire/src/card/operations/data.rs

use crate::constants::MAX_READ_LEN;
use crate::protocol::responses::decode_value;
use crate::protocol::Command;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::Result;

/// ReadData (0xBD): read `length` bytes starting at `offset` from a
/// standard or backup data file. The response arrives across an open-ended
/// continuation loop; accumulation stops at the first non-AdditionalFrame
/// status and is capped at [`MAX_READ_LEN`].
///
/// Offset and length are 24-bit little-endian on the wire; a length of zero
/// asks the card for the whole file.
pub fn read_data<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
    file_id: u8,
    offset: u32,
    length: u32,
) -> Result<Vec<u8>> {
    let (status, data) = session.exchange_chained(
        transceiver,
        &Command::ReadData {
            file_id,
            offset,
            length,
        },
        MAX_READ_LEN,
    )?;
    status.into_result()?;
    Ok(data)
}

/// GetValue (0x6C): the current signed 32-bit value of a value file.
pub fn get_value<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
    file_id: u8,
) -> Result<i32> {
    let (status, payload) = session.exchange(transceiver, &Command::GetValue { file_id })?;
    status.into_result()?;
    decode_value(&payload)
}
