use std::ffi::{CString, c_char};

use crate::channel::Channel;
use crate::constants::{Edge, Level};
use crate::error::{DaqError, Result};
use crate::task::TaskHandle;

/// One or more counter input/output virtual channels and their attributes.
#[derive(Debug)]
pub struct CIOChannel {
    pub(crate) inner: Channel,
}

impl CIOChannel {
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Arms count reset for an edge-counting channel: whenever an active
    /// edge arrives on `source`, the count register reloads `reset_count`.
    pub fn cfg_count_edges_count_reset(
        &self,
        source: &str,
        reset_count: u32,
        active_edge: Edge,
        dig_fltr_min_pulse_width: f64,
    ) -> Result<()> {
        type CfgCountResetFn =
            unsafe extern "C" fn(TaskHandle, *const c_char, u32, i32, f64) -> i32;
        let cfunc: CfgCountResetFn = self
            .inner
            .driver
            .entry("ArtDAQ_CfgCICountEdgesCountReset")?;
        let c_source = CString::new(source)?;
        let status = unsafe {
            cfunc(
                self.inner.handle,
                c_source.as_ptr(),
                reset_count,
                active_edge as i32,
                dig_fltr_min_pulse_width,
            )
        };
        self.inner.driver.check(status)
    }

    /// Disarms count reset for the task's edge-counting channels.
    pub fn disable_count_edges_count_reset(&self) -> Result<()> {
        type DisableCountResetFn = unsafe extern "C" fn(TaskHandle) -> i32;
        let cfunc: DisableCountResetFn = self
            .inner
            .driver
            .entry("ArtDAQ_DisableCICountEdgesCountReset")?;
        let status = unsafe { cfunc(self.inner.handle) };
        self.inner.driver.check(status)
    }

    /// Minimum pulse width in seconds the source-terminal filter passes.
    pub fn source_dig_fltr_min_pulse_width(&self) -> Result<f64> {
        self.inner
            .read_f64("ArtDAQ_GetCISourceDigFltrMinPulseWidth")
    }

    pub fn set_source_dig_fltr_min_pulse_width(&self, val: f64) -> Result<()> {
        self.inner
            .write_f64("ArtDAQ_SetCISourceDigFltrMinPulseWidth", val)
    }

    pub fn reset_source_dig_fltr_min_pulse_width(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCISourceDigFltrMinPulseWidth")
    }

    /// Minimum pulse width in seconds the gate-terminal filter passes.
    pub fn gate_dig_fltr_min_pulse_width(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetCIGateDigFltrMinPulseWidth")
    }

    pub fn set_gate_dig_fltr_min_pulse_width(&self, val: f64) -> Result<()> {
        self.inner
            .write_f64("ArtDAQ_SetCIGateDigFltrMinPulseWidth", val)
    }

    pub fn reset_gate_dig_fltr_min_pulse_width(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCIGateDigFltrMinPulseWidth")
    }

    /// Minimum pulse width in seconds the aux-terminal filter passes.
    pub fn aux_dig_fltr_min_pulse_width(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetCIAuxDigFltrMinPulseWidth")
    }

    pub fn set_aux_dig_fltr_min_pulse_width(&self, val: f64) -> Result<()> {
        self.inner
            .write_f64("ArtDAQ_SetCIAuxDigFltrMinPulseWidth", val)
    }

    pub fn reset_aux_dig_fltr_min_pulse_width(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCIAuxDigFltrMinPulseWidth")
    }

    /// Whether the encoder A input signal is inverted.
    pub fn encoder_a_input_invert(&self) -> Result<bool> {
        self.inner.read_bool("ArtDAQ_GetCIEncoderAInputInvert")
    }

    pub fn set_encoder_a_input_invert(&self, val: bool) -> Result<()> {
        self.inner.write_bool("ArtDAQ_SetCIEncoderAInputInvert", val)
    }

    pub fn reset_encoder_a_input_invert(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCIEncoderAInputInvert")
    }

    /// Whether the encoder B input signal is inverted.
    pub fn encoder_b_input_invert(&self) -> Result<bool> {
        self.inner.read_bool("ArtDAQ_GetCIEncoderBInputInvert")
    }

    pub fn set_encoder_b_input_invert(&self, val: bool) -> Result<()> {
        self.inner.write_bool("ArtDAQ_SetCIEncoderBInputInvert", val)
    }

    pub fn reset_encoder_b_input_invert(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCIEncoderBInputInvert")
    }

    /// Whether the encoder Z input signal is inverted.
    pub fn encoder_z_input_invert(&self) -> Result<bool> {
        self.inner.read_bool("ArtDAQ_GetCIEncoderZInputInvert")
    }

    pub fn set_encoder_z_input_invert(&self, val: bool) -> Result<()> {
        self.inner.write_bool("ArtDAQ_SetCIEncoderZInputInvert", val)
    }

    pub fn reset_encoder_z_input_invert(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCIEncoderZInputInvert")
    }

    /// Terminal the channel generates pulses on.
    pub fn pulse_term(&self) -> Result<String> {
        self.inner.read_string("ArtDAQ_GetCOPulseTerm")
    }

    pub fn set_pulse_term(&self, val: &str) -> Result<()> {
        self.inner.write_string("ArtDAQ_SetCOPulseTerm", val)
    }

    pub fn reset_pulse_term(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetCOPulseTerm")
    }

    /// Current value of the count register.
    pub fn count(&self) -> Result<i32> {
        self.inner.read_i32("ArtDAQ_GetCOCount")
    }

    /// Current state of the counter's output terminal.
    pub fn output_state(&self) -> Result<Level> {
        let raw = self.inner.read_i32("ArtDAQ_GetCOOutputState")?;
        Level::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "counter output state",
            value: raw,
        })
    }

    /// Whether retriggered pulse trains repeat the initial delay before
    /// each burst or only before the first.
    pub fn enable_initial_delay_on_retrigger(&self) -> Result<bool> {
        self.inner
            .read_bool("ArtDAQ_GetCOEnableInitialDelayOnRetrigger")
    }

    pub fn set_enable_initial_delay_on_retrigger(&self, val: bool) -> Result<()> {
        self.inner
            .write_bool("ArtDAQ_SetCOEnableInitialDelayOnRetrigger", val)
    }
}
