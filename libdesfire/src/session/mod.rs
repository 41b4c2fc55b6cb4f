// libdesfire/src/session/mod.rs
//! Per-tag session state and the block exchange engine.
//!
//! A [`TagSession`] owns the only real protocol state in this crate: the
//! alternating ISO 14443-4 block-numbering bit (PCB), the card identifier
//! assigned at PPS time, and the currently selected application. One session
//! corresponds to one activated card conversation; it is not thread-safe
//! and must not be shared without external mutual exclusion.

mod activation;

pub use activation::{activate, request_ats, select_protocol_parameters};

use log::{debug, trace};

use crate::constants::{
    CMD_ADDITIONAL_FRAME, MAX_CID, MAX_CONTINUATION_EXCHANGES, PCB_BLOCK_EVEN, PCB_BLOCK_ODD,
};
use crate::protocol::{Command, Frame};
use crate::status::PiccStatus;
use crate::transceiver::Transceiver;
use crate::types::Aid;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// State of one selected-card conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSession {
    pcb: u8,
    cid: u8,
    selected_application: Option<Aid>,
}

impl TagSession {
    /// Create a session for a freshly activated card. `cid` is the card
    /// identifier negotiated at PPS time, 0 to 14.
    pub fn new(cid: u8) -> Result<Self> {
        if cid > MAX_CID {
            return Err(Error::InvalidCid(cid));
        }
        Ok(Self {
            pcb: PCB_BLOCK_EVEN,
            cid,
            selected_application: None,
        })
    }

    /// The PCB value the next exchange will transmit.
    pub fn pcb(&self) -> u8 {
        self.pcb
    }

    /// Card identifier of this session.
    pub fn cid(&self) -> u8 {
        self.cid
    }

    /// Application selected by the last successful SelectApplication, if
    /// any.
    pub fn selected_application(&self) -> Option<Aid> {
        self.selected_application
    }

    pub(crate) fn set_selected_application(&mut self, aid: Aid) {
        self.selected_application = Some(aid);
    }

    /// Drive one encode -> transceive -> decode round trip for `command`.
    ///
    /// The PCB toggles exactly once per call, before transmission,
    /// regardless of the outcome; that keeps the block-numbering invariant
    /// intact even across failed exchanges. Transport failures return
    /// immediately without any application-status interpretation; this
    /// layer never retries.
    pub fn exchange<T: Transceiver>(
        &mut self,
        transceiver: &mut T,
        command: &Command,
    ) -> Result<(PiccStatus, Vec<u8>)> {
        self.exchange_raw(transceiver, command.command_code(), &command.encode())
    }

    fn exchange_raw<T: Transceiver>(
        &mut self,
        transceiver: &mut T,
        command: u8,
        payload: &[u8],
    ) -> Result<(PiccStatus, Vec<u8>)> {
        let mut frame = Frame::request_body(self.pcb, self.cid, command, payload)?;

        // One toggle per exchange, before the frame leaves.
        self.pcb = if self.pcb == PCB_BLOCK_EVEN {
            PCB_BLOCK_ODD
        } else {
            PCB_BLOCK_EVEN
        };

        let checksum = transceiver.calculate_checksum(&frame)?;
        frame.extend_from_slice(&checksum);

        trace!("tx cmd {:#04x}: {}", command, bytes_to_hex(&frame));
        let response = transceiver.transceive(&frame)?;
        trace!("rx: {}", bytes_to_hex(&response));

        let (status, payload) = Frame::decode_response(&response)?;
        debug!(
            "cmd {:#04x} -> {} ({} payload bytes)",
            command,
            status,
            payload.len()
        );
        Ok((status, payload))
    }

    /// Drive an initial exchange plus the continuation loop: while the card
    /// reports AdditionalFrame, issue 0xAF follow-ups and accumulate the
    /// payload bytes. Terminates on the first non-continuation status,
    /// which is returned along with everything accumulated so far.
    ///
    /// The loop is bounded twice over: the accumulated byte count may not
    /// exceed `capacity` ([`Error::NoRoom`]), and no more than
    /// [`MAX_CONTINUATION_EXCHANGES`] follow-ups are issued
    /// ([`Error::ChainTooLong`]).
    pub fn exchange_chained<T: Transceiver>(
        &mut self,
        transceiver: &mut T,
        command: &Command,
        capacity: usize,
    ) -> Result<(PiccStatus, Vec<u8>)> {
        let (mut status, mut accumulated) = self.exchange(transceiver, command)?;
        if accumulated.len() > capacity {
            return Err(Error::NoRoom { capacity });
        }

        let mut continuations = 0usize;
        while status.is_additional_frame() {
            continuations += 1;
            if continuations > MAX_CONTINUATION_EXCHANGES {
                return Err(Error::ChainTooLong {
                    limit: MAX_CONTINUATION_EXCHANGES,
                });
            }

            let (next_status, chunk) =
                self.exchange_raw(transceiver, CMD_ADDITIONAL_FRAME, &[])?;
            if accumulated.len() + chunk.len() > capacity {
                return Err(Error::NoRoom { capacity });
            }
            accumulated.extend_from_slice(&chunk);
            status = next_status;
        }

        Ok((status, accumulated))
    }
}
