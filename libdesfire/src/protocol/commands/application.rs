// libdesfire/src/protocol/commands/application.rs

use crate::types::Aid;

/// Encode the SelectApplication request payload (command code 0x5A):
/// the 3-byte AID as-is.
pub fn encode_select_application(aid: Aid) -> Vec<u8> {
    aid.as_bytes().to_vec()
}
