//! Diagnostics settings. Nothing here changes what is printed on stdout.

pub mod error;
pub mod log;

pub use self::{error::Error, log::LogConfig};
