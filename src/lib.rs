//! Rust bindings for the ArtDAQ data-acquisition driver library.
//!
//! This crate is a thin marshaling layer: every operation resolves one
//! named entry point of the vendor's dynamic library, passes its arguments
//! through the C calling convention, and translates the returned status
//! code. All semantic validation, coercion, calibration math, and hardware
//! timing happen inside the closed-source driver.
//!
//! Task lifecycle is out of scope: callers obtain a raw task handle from
//! whatever manages their acquisition session and wrap it with
//! [`TaskHandle::from_raw`]. Channel factories and calibration borrow the
//! handle; they never free it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use artdaq::{AIChannelCollection, AiVoltageChanOptions, Driver, TaskHandle};
//!
//! # fn demo(raw: *mut std::ffi::c_void) -> artdaq::Result<()> {
//! let driver = Arc::new(Driver::load()?);
//! let handle = unsafe { TaskHandle::from_raw(raw) };
//! let ai = AIChannelCollection::new(driver, handle);
//! let chan = ai.add_ai_voltage_chan("dev1/ai0:3", "sense", AiVoltageChanOptions::default())?;
//! assert_eq!(chan.name(), "sense0:3");
//! chan.set_max(5.0)?;
//! # Ok(())
//! # }
//! ```

pub mod calibration;
pub mod channel;
pub mod channels;
pub mod collections;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod task;
pub mod utils;

pub use calibration::Calibration;
pub use channel::Channel;
pub use channels::{AIChannel, AOChannel, CIOChannel, DIOChannel};
pub use collections::{
    AIChannelCollection, AOChannelCollection, AiBridgeChanOptions, AiCurrentChanOptions,
    AiResistanceChanOptions, AiRtdChanOptions, AiStrainGageChanOptions,
    AiThermocoupleChanOptions, AiThrmstrIexChanOptions, AiThrmstrVexChanOptions,
    AiVoltageChanOptions, AiVoltageIepeChanOptions, AoCurrentChanOptions, AoVoltageChanOptions,
    CIOChannelCollection, CiAngEncoderChanOptions, CiCountEdgesChanOptions,
    CoPulseChanFreqOptions, DIChannelCollection,
};
pub use error::{DaqError, Result};
pub use ffi::{Driver, DriverLibrary, RawSymbol, SymbolSource};
pub use task::TaskHandle;
