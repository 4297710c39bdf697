//! Channel subtypes and their attribute accessors.
//!
//! Every attribute follows the same triad: `x()` issues a native query,
//! `set_x()` a native command, `reset_x()` a restore-to-default command.
//! The driver is authoritative for range and type checks; a rejected value
//! comes back as a [`crate::DaqError::Driver`].

mod ai;
mod ao;
mod cio;
mod dio;

pub use ai::AIChannel;
pub use ao::AOChannel;
pub use cio::CIOChannel;
pub use dio::DIOChannel;
