// libdesfire/src/protocol/responses/mod.rs
//
// Typed decoders for response payloads. Unlike request frames, DESFire
// responses carry no command echo: the command that was sent determines
// which decoder applies, so dispatch happens in `card::operations` rather
// than through a response-code match.

pub mod application;
pub mod data;
pub mod file;
pub mod key;
pub mod version;

pub use application::decode_application_ids;
pub use data::decode_value;
pub use file::{decode_file_ids, decode_file_settings};
pub use key::{decode_key_settings, decode_key_version};
pub use version::{decode_production_info, decode_version_ident};
