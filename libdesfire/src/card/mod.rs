// libdesfire/src/card/mod.rs
//! Command catalog: one procedure per supported card operation.
//!
//! Each procedure encodes its request, drives the session's block exchange
//! engine (directly or through the continuation loop) and decodes the typed
//! response. Every failure - transport, card-reported or decode - returns
//! immediately; no partially filled record ever escapes on an error path.

pub mod operations;

pub use operations::application::{get_application_ids, select_application};
pub use operations::data::{get_value, read_data};
pub use operations::file::{get_file_ids, get_file_settings};
pub use operations::info::get_version;
pub use operations::key::{get_key_settings, get_key_version};
