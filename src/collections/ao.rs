use std::ffi::{CString, c_char};
use std::sync::Arc;

use tracing::info;

use crate::channel::Channel;
use crate::channels::AOChannel;
use crate::collections::assigned_channel_name;
use crate::constants::{CurrentUnits, VoltageUnits};
use crate::error::Result;
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Factory for the analog output channels of a task.
pub struct AOChannelCollection {
    driver: Arc<Driver>,
    handle: TaskHandle,
}

pub struct AoVoltageChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: VoltageUnits,
    pub custom_scale_name: String,
}

impl Default for AoVoltageChanOptions {
    fn default() -> Self {
        Self {
            min_val: -10.0,
            max_val: 10.0,
            units: VoltageUnits::Volts,
            custom_scale_name: String::new(),
        }
    }
}

pub struct AoCurrentChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: CurrentUnits,
    pub custom_scale_name: String,
}

impl Default for AoCurrentChanOptions {
    fn default() -> Self {
        Self {
            min_val: 0.0,
            max_val: 0.02,
            units: CurrentUnits::Amps,
            custom_scale_name: String::new(),
        }
    }
}

type CreateAoChanFn = unsafe extern "C" fn(
    TaskHandle,
    *const c_char,
    *const c_char,
    f64,
    f64,
    i32,
    *const c_char,
) -> i32;

impl AOChannelCollection {
    pub fn new(driver: Arc<Driver>, handle: TaskHandle) -> Self {
        Self { driver, handle }
    }

    fn create_chan(&self, physical_channel: &str, name_to_assign: &str) -> Result<AOChannel> {
        let name = assigned_channel_name(physical_channel, name_to_assign);
        Ok(AOChannel {
            inner: Channel::new(self.driver.clone(), self.handle, name)?,
        })
    }

    /// Creates channel(s) to generate voltage.
    pub fn add_ao_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AoVoltageChanOptions,
    ) -> Result<AOChannel> {
        let cfunc: CreateAoChanFn = self.driver.entry("ArtDAQ_CreateAOVoltageChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog output voltage channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) to generate current.
    pub fn add_ao_current_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AoCurrentChanOptions,
    ) -> Result<AOChannel> {
        let cfunc: CreateAoChanFn = self.driver.entry("ArtDAQ_CreateAOCurrentChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog output current channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }
}
