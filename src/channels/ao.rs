use crate::channel::Channel;
use crate::constants::AOOutputChannelType;
use crate::error::{DaqError, Result};

/// One or more analog output virtual channels and their attributes.
#[derive(Debug)]
pub struct AOChannel {
    pub(crate) inner: Channel,
}

impl AOChannel {
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Maximum value you expect to generate, in the channel's units. Writes
    /// above it fail; the driver may coerce it down if other task settings
    /// restrict the device.
    pub fn max(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAOMax")
    }

    pub fn set_max(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAOMax", val)
    }

    pub fn reset_max(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAOMax")
    }

    /// Minimum value you expect to generate, in the channel's units. Writes
    /// below it fail; the driver may coerce it up if other task settings
    /// restrict the device.
    pub fn min(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAOMin")
    }

    pub fn set_min(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAOMin", val)
    }

    pub fn reset_min(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAOMin")
    }

    /// Name of the custom scale applied to the channel.
    pub fn custom_scale_name(&self) -> Result<String> {
        self.inner.read_string("ArtDAQ_GetAOCustomScaleName")
    }

    pub fn set_custom_scale_name(&self, val: &str) -> Result<()> {
        self.inner.write_string("ArtDAQ_SetAOCustomScaleName", val)
    }

    pub fn reset_custom_scale_name(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAOCustomScaleName")
    }

    /// Whether the channel generates voltage, current, or a waveform.
    pub fn output_type(&self) -> Result<AOOutputChannelType> {
        let raw = self.inner.read_i32("ArtDAQ_GetAOOutputType")?;
        AOOutputChannelType::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "analog output type",
            value: raw,
        })
    }
}
