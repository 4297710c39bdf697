use std::ffi::{CString, c_char};
use std::sync::Arc;

use tracing::info;

use crate::channel::Channel;
use crate::channels::CIOChannel;
use crate::collections::assigned_channel_name;
use crate::constants::{
    AngleUnits, CountDirection, Edge, EncoderType, EncoderZIndexPhase, FrequencyUnits, Level,
};
use crate::error::Result;
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Factory for the counter input/output channels of a task.
pub struct CIOChannelCollection {
    driver: Arc<Driver>,
    handle: TaskHandle,
}

pub struct CiCountEdgesChanOptions {
    pub edge: Edge,
    pub initial_count: u32,
    pub count_direction: CountDirection,
}

impl Default for CiCountEdgesChanOptions {
    fn default() -> Self {
        Self {
            edge: Edge::Rising,
            initial_count: 0,
            count_direction: CountDirection::CountUp,
        }
    }
}

pub struct CiAngEncoderChanOptions {
    pub decoding_type: EncoderType,
    /// Whether the Z index reloads the count register.
    pub zidx_enable: bool,
    /// Value the count register reloads at the Z-index position.
    pub zidx_val: f64,
    pub zidx_phase: EncoderZIndexPhase,
    pub units: AngleUnits,
    pub pulses_per_rev: u32,
    /// Position in `units` when the measurement starts.
    pub initial_angle: f64,
    pub custom_scale_name: String,
}

impl Default for CiAngEncoderChanOptions {
    fn default() -> Self {
        Self {
            decoding_type: EncoderType::X4,
            zidx_enable: false,
            zidx_val: 0.0,
            zidx_phase: EncoderZIndexPhase::AHighBHigh,
            units: AngleUnits::Degrees,
            pulses_per_rev: 24,
            initial_angle: 0.0,
            custom_scale_name: String::new(),
        }
    }
}

pub struct CoPulseChanFreqOptions {
    pub units: FrequencyUnits,
    pub idle_state: Level,
    /// Seconds to wait before generating the first pulse.
    pub initial_delay: f64,
    pub freq: f64,
    pub duty_cycle: f64,
}

impl Default for CoPulseChanFreqOptions {
    fn default() -> Self {
        Self {
            units: FrequencyUnits::Hz,
            idle_state: Level::Low,
            initial_delay: 0.0,
            freq: 1.0,
            duty_cycle: 0.5,
        }
    }
}

impl CIOChannelCollection {
    pub fn new(driver: Arc<Driver>, handle: TaskHandle) -> Self {
        Self { driver, handle }
    }

    fn create_chan(&self, counter: &str, name_to_assign: &str) -> Result<CIOChannel> {
        let name = assigned_channel_name(counter, name_to_assign);
        Ok(CIOChannel {
            inner: Channel::new(self.driver.clone(), self.handle, name)?,
        })
    }

    /// Creates channel(s) that count edges of a digital signal.
    pub fn add_ci_count_edges_chan(
        &self,
        counter: &str,
        name_to_assign: &str,
        opts: CiCountEdgesChanOptions,
    ) -> Result<CIOChannel> {
        type CreateFn =
            unsafe extern "C" fn(TaskHandle, *const c_char, *const c_char, i32, u32, i32) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateCICountEdgesChan")?;
        let c_counter = CString::new(counter)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding counter input edge-counting channel {counter}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_counter.as_ptr(),
                c_name.as_ptr(),
                opts.edge as i32,
                opts.initial_count,
                opts.count_direction as i32,
            )
        };
        self.driver.check(status)?;
        self.create_chan(counter, name_to_assign)
    }

    /// Creates channel(s) measuring angular position with a quadrature
    /// encoder.
    pub fn add_ci_ang_encoder_chan(
        &self,
        counter: &str,
        name_to_assign: &str,
        opts: CiAngEncoderChanOptions,
    ) -> Result<CIOChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            i32,
            u32,
            f64,
            i32,
            i32,
            u32,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateCIAngEncoderChan")?;
        let c_counter = CString::new(counter)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding counter input angular encoder channel {counter}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_counter.as_ptr(),
                c_name.as_ptr(),
                opts.decoding_type as i32,
                opts.zidx_enable as u32,
                opts.zidx_val,
                opts.zidx_phase as i32,
                opts.units as i32,
                opts.pulses_per_rev,
                opts.initial_angle,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(counter, name_to_assign)
    }

    /// Creates channel(s) generating a pulse train defined by frequency and
    /// duty cycle.
    pub fn add_co_pulse_chan_freq(
        &self,
        counter: &str,
        name_to_assign: &str,
        opts: CoPulseChanFreqOptions,
    ) -> Result<CIOChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            i32,
            i32,
            f64,
            f64,
            f64,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateCOPulseChanFreq")?;
        let c_counter = CString::new(counter)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding counter output pulse channel {counter}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_counter.as_ptr(),
                c_name.as_ptr(),
                opts.units as i32,
                opts.idle_state as i32,
                opts.initial_delay,
                opts.freq,
                opts.duty_cycle,
            )
        };
        self.driver.check(status)?;
        self.create_chan(counter, name_to_assign)
    }
}
