// libdesfire/src/card/operations/application.rs

use crate::constants::MAX_AID_BYTES;
use crate::protocol::responses::decode_application_ids;
use crate::protocol::Command;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::Aid;
use crate::Result;

/// SelectApplication (0x5A). On overall success the session's selected
/// application marker is updated to `aid`; on any failure it is left
/// untouched.
pub fn select_application<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
    aid: Aid,
) -> Result<()> {
    let (status, _payload) = session.exchange(transceiver, &Command::SelectApplication { aid })?;
    status.into_result()?;
    session.set_selected_application(aid);
    Ok(())
}

/// GetApplicationIDs (0x6A): the 3-byte AIDs of every application on the
/// card, accumulated across continuation exchanges with a 28-application
/// capacity ceiling. An empty list is a successful outcome.
pub fn get_application_ids<T: Transceiver>(
    session: &mut TagSession,
    transceiver: &mut T,
) -> Result<Vec<Aid>> {
    let (status, accumulated) =
        session.exchange_chained(transceiver, &Command::GetApplicationIds, MAX_AID_BYTES)?;
    status.into_result()?;
    decode_application_ids(&accumulated)
}
