// libdesfire/src/transceiver/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{crc_a, MockTransceiver};
pub use traits::Transceiver;
