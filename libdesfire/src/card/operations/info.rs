// libdesfire/src/card/operations/info.rs

use crate::protocol::responses::{decode_production_info, decode_version_ident};
use crate::protocol::Command;
use crate::session::TagSession;
use crate::status::PiccStatus;
use crate::transceiver::Transceiver;
use crate::types::VersionInfo;
use crate::{Error, Result};

/// GetVersion (0x60): hardware identity, software identity and production
/// info, collected across exactly three chained exchanges. The card must
/// report AdditionalFrame after the first two frames and OperationOk after
/// the third. A card-reported failure propagates as [`Error::Card`]; a
/// chain of the wrong shape (an early OperationOk, or a fourth frame
/// announced) is [`Error::UnexpectedStatus`]. Either way the partial
/// record is discarded.
pub fn get_version<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
) -> Result<VersionInfo> {
    let (status, first) = session.exchange(transceiver, &Command::GetVersion)?;
    expect_additional_frame(status)?;
    let hardware = decode_version_ident(&first)?;

    let (status, second) = session.exchange(transceiver, &Command::AdditionalFrame)?;
    expect_additional_frame(status)?;
    let software = decode_version_ident(&second)?;

    let (status, third) = session.exchange(transceiver, &Command::AdditionalFrame)?;
    if status.is_additional_frame() {
        return Err(Error::UnexpectedStatus(status));
    }
    status.into_result()?;
    let (uid, batch_number, production_week, production_year) = decode_production_info(&third)?;

    Ok(VersionInfo {
        hardware,
        software,
        uid,
        batch_number,
        production_week,
        production_year,
    })
}

fn expect_additional_frame(status: PiccStatus) -> Result<()> {
    match status {
        PiccStatus::AdditionalFrame => Ok(()),
        // A premature OperationOk is a malformed chain, not a card failure.
        PiccStatus::OperationOk => Err(Error::UnexpectedStatus(status)),
        other => Err(Error::Card(other)),
    }
}
