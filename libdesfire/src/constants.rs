// libdesfire/src/constants.rs
//! Protocol constants shared across the crate.

/// ISO 14443-4 "Request Answer To Select" command code.
pub const CMD_RATS: u8 = 0xE0;

/// RATS parameter byte: FSDI for a 64-byte frame in the high nibble; the low
/// nibble carries the CID.
pub const RATS_FSDI_64: u8 = 0x50;

/// Protocol and Parameter Selection prefix; the low nibble carries the CID.
pub const PPS_PREFIX: u8 = 0xD0;

/// DESFire command code: GetVersion.
pub const CMD_GET_VERSION: u8 = 0x60;
/// DESFire command code: continuation request for chained responses.
pub const CMD_ADDITIONAL_FRAME: u8 = 0xAF;
/// DESFire command code: SelectApplication.
pub const CMD_SELECT_APPLICATION: u8 = 0x5A;
/// DESFire command code: GetFileIDs.
pub const CMD_GET_FILE_IDS: u8 = 0x6F;
/// DESFire command code: GetFileSettings.
pub const CMD_GET_FILE_SETTINGS: u8 = 0xF5;
/// DESFire command code: GetKeySettings.
pub const CMD_GET_KEY_SETTINGS: u8 = 0x45;
/// DESFire command code: GetKeyVersion.
pub const CMD_GET_KEY_VERSION: u8 = 0x64;
/// DESFire command code: ReadData.
pub const CMD_READ_DATA: u8 = 0xBD;
/// DESFire command code: GetValue.
pub const CMD_GET_VALUE: u8 = 0x6C;
/// DESFire command code: GetApplicationIDs.
pub const CMD_GET_APPLICATION_IDS: u8 = 0x6A;

/// The two values the protocol control byte alternates between
/// (ISO 14443-4 block numbering bit).
pub const PCB_BLOCK_EVEN: u8 = 0x0A;
/// See [`PCB_BLOCK_EVEN`].
pub const PCB_BLOCK_ODD: u8 = 0x0B;

/// Highest card identifier assignable at PPS time.
pub const MAX_CID: u8 = 14;

/// Maximum request frame size, bounded by the transceiver FIFO.
pub const MAX_FRAME_LEN: usize = 64;

/// Request frame overhead: PCB + CID + command byte + 2 checksum bytes.
pub const FRAME_OVERHEAD: usize = 5;

/// Response header: PCB echo + CID echo + application status byte.
pub const RESPONSE_HEADER_LEN: usize = 3;

/// Application identifiers are always 3 bytes.
pub const AID_LEN: usize = 3;

/// A card holds at most 28 applications.
pub const MAX_APPLICATION_COUNT: usize = 28;

/// Capacity ceiling for the accumulated GetApplicationIDs payload.
pub const MAX_AID_BYTES: usize = MAX_APPLICATION_COUNT * AID_LEN;

/// Capacity ceiling for a single ReadData accumulation.
pub const MAX_READ_LEN: usize = 4096;

/// Ceiling on continuation exchanges within one chained operation. A card
/// that streams empty AdditionalFrame payloads must not spin the loop
/// forever.
pub const MAX_CONTINUATION_EXCHANGES: usize = 64;

/// MFRC522 TxModeReg / RxModeReg addresses. Written with 0x00 after a PPS
/// that negotiated PPS1 = 0, disabling automatic CRC framing on the
/// transport.
pub const REG_TX_MODE: u8 = 0x12;
/// See [`REG_TX_MODE`].
pub const REG_RX_MODE: u8 = 0x13;
