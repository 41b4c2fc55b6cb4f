// libdesfire/src/protocol/mod.rs

pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use frame::Frame;
pub use responses::*;
