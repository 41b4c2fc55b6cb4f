// libdesfire/src/session/activation.rs
//! Card activation: RATS and PPS, performed once per card before any
//! command-catalog call.

use log::debug;

use crate::constants::{
    CMD_RATS, MAX_CID, PPS_PREFIX, RATS_FSDI_64, REG_RX_MODE, REG_TX_MODE,
};
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Transmit "Request Answer To Select" (0xE0) and return the raw ATS bytes.
/// The parameter byte announces a 64-byte frame size and the requested
/// `cid`. On a transport failure the card is halted before the error
/// propagates, so it does not linger half-activated in the field.
pub fn request_ats<T: Transceiver>(transceiver: &mut T, cid: u8) -> Result<Vec<u8>> {
    if cid > MAX_CID {
        return Err(Error::InvalidCid(cid));
    }

    let mut request = vec![CMD_RATS, RATS_FSDI_64 | (cid & 0x0F)];
    let checksum = transceiver.calculate_checksum(&request)?;
    request.extend_from_slice(&checksum);

    match transceiver.transceive(&request) {
        Ok(ats) => {
            debug!("ats: {}", bytes_to_hex(&ats));
            Ok(ats)
        }
        Err(err) => {
            let _ = transceiver.halt_card();
            Err(err.into())
        }
    }
}

/// Transmit "Protocol and Parameter Selection" (0xD0 | cid). When PPS1 is
/// zero the transceiver's automatic CRC framing is switched off by writing
/// the TX/RX mode registers, a one-time side effect of the negotiated mode.
pub fn select_protocol_parameters<T: Transceiver>(
    transceiver: &mut T,
    cid: u8,
    pps0: u8,
    pps1: u8,
) -> Result<()> {
    if cid > MAX_CID {
        return Err(Error::InvalidCid(cid));
    }

    let mut request = vec![PPS_PREFIX | (cid & 0x0F), pps0, pps1];
    let checksum = transceiver.calculate_checksum(&request)?;
    request.extend_from_slice(&checksum);

    transceiver.transceive(&request)?;
    debug!("pps accepted: cid={} pps0={:#04x} pps1={:#04x}", cid, pps0, pps1);

    if pps1 == 0x00 {
        transceiver.write_register(REG_TX_MODE, 0x00)?;
        transceiver.write_register(REG_RX_MODE, 0x00)?;
    }

    Ok(())
}

/// Run the full activation sequence (RATS, then PPS with PPS0 = 0x11 and
/// PPS1 = 0x00) and hand back a fresh [`TagSession`] for the card.
pub fn activate<T: Transceiver>(transceiver: &mut T, cid: u8) -> Result<TagSession> {
    request_ats(transceiver, cid)?;
    // PPS0 = 0x11 announces the PPS1 byte; PPS1 = 0x00 selects the default
    // 106 kbit/s divisors in both directions.
    select_protocol_parameters(transceiver, cid, 0x11, 0x00)?;
    TagSession::new(cid)
}
