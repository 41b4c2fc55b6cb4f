// libdesfire/src/card/operations/mod.rs

pub mod application;
pub mod data;
pub mod file;
pub mod info;
pub mod key;
