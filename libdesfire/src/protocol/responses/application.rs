// libdesfire/src/protocol/responses/application.rs

use crate::constants::AID_LEN;
use crate::protocol::parser;
use crate::types::Aid;
use crate::{Error, Result};

/// Decode an accumulated GetApplicationIDs payload into 3-byte AIDs.
/// A byte count that is not a multiple of 3 is a decode failure, never a
/// silent truncation. An empty payload is a legal empty application list.
pub fn decode_application_ids(data: &[u8]) -> Result<Vec<Aid>> {
    if data.len() % AID_LEN != 0 {
        return Err(Error::MisalignedAidList(data.len()));
    }

    let mut aids = Vec::with_capacity(data.len() / AID_LEN);
    for i in 0..data.len() / AID_LEN {
        aids.push(parser::aid_at(data, i * AID_LEN)?);
    }
    Ok(aids)
}
