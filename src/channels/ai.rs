use crate::channel::Channel;
use crate::constants::{AIMeasurementType, AutoZeroType, RtdType, TerminalConfiguration};
use crate::error::{DaqError, Result};

/// One or more analog input virtual channels and their attributes.
#[derive(Debug)]
pub struct AIChannel {
    pub(crate) inner: Channel,
}

impl AIChannel {
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Source of the channel signal: the I/O connector or one of the
    /// device's calibration signals.
    pub fn input_src(&self) -> Result<String> {
        self.inner.read_string("ArtDAQ_GetAIInputSrc")
    }

    pub fn set_input_src(&self, val: &str) -> Result<()> {
        self.inner.write_string("ArtDAQ_SetAIInputSrc", val)
    }

    /// Maximum value you expect to measure, in the channel's units. Reads
    /// back the coerced maximum the device can measure with the current
    /// settings.
    pub fn max(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIMax")
    }

    pub fn set_max(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIMax", val)
    }

    pub fn reset_max(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIMax")
    }

    /// Minimum value you expect to measure, in the channel's units. Reads
    /// back the coerced minimum the device can measure with the current
    /// settings.
    pub fn min(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIMin")
    }

    pub fn set_min(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIMin", val)
    }

    pub fn reset_min(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIMin")
    }

    /// Name of the custom scale applied to the channel.
    pub fn custom_scale_name(&self) -> Result<String> {
        self.inner.read_string("ArtDAQ_GetAICustomScaleName")
    }

    pub fn set_custom_scale_name(&self, val: &str) -> Result<()> {
        self.inner.write_string("ArtDAQ_SetAICustomScaleName", val)
    }

    pub fn reset_custom_scale_name(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAICustomScaleName")
    }

    /// Measurement the channel was created to take.
    pub fn meas_type(&self) -> Result<AIMeasurementType> {
        let raw = self.inner.read_i32("ArtDAQ_GetAIMeasType")?;
        AIMeasurementType::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "analog input measurement type",
            value: raw,
        })
    }

    pub fn term_cfg(&self) -> Result<TerminalConfiguration> {
        let raw = self.inner.read_i32("ArtDAQ_GetAITermCfg")?;
        TerminalConfiguration::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "terminal configuration",
            value: raw,
        })
    }

    pub fn set_term_cfg(&self, val: TerminalConfiguration) -> Result<()> {
        self.inner.write_i32("ArtDAQ_SetAITermCfg", val as i32)
    }

    pub fn reset_term_cfg(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAITermCfg")
    }

    /// How often the driver measures ground and subtracts it from samples.
    pub fn auto_zero_mode(&self) -> Result<AutoZeroType> {
        let raw = self.inner.read_i32("ArtDAQ_GetAIAutoZeroMode")?;
        AutoZeroType::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "auto-zero mode",
            value: raw,
        })
    }

    pub fn set_auto_zero_mode(&self, val: AutoZeroType) -> Result<()> {
        self.inner.write_i32("ArtDAQ_SetAIAutoZeroMode", val as i32)
    }

    pub fn reset_auto_zero_mode(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIAutoZeroMode")
    }

    /// Whether the open-thermocouple detection bias voltage is applied to
    /// the channel. Changing this may require settling time before returned
    /// data is valid.
    pub fn open_thrmcpl_detect_enable(&self) -> Result<bool> {
        self.inner.read_bool("ArtDAQ_GetAIOpenThrmcplDetectEnable")
    }

    pub fn set_open_thrmcpl_detect_enable(&self, val: bool) -> Result<()> {
        self.inner
            .write_bool("ArtDAQ_SetAIOpenThrmcplDetectEnable", val)
    }

    pub fn reset_open_thrmcpl_detect_enable(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIOpenThrmcplDetectEnable")
    }

    /// Type of RTD connected to the channel.
    pub fn rtd_type(&self) -> Result<RtdType> {
        let raw = self.inner.read_i32("ArtDAQ_GetAIRTDType")?;
        RtdType::from_raw(raw).ok_or(DaqError::UnexpectedValue {
            attribute: "RTD type",
            value: raw,
        })
    }

    pub fn set_rtd_type(&self, val: RtdType) -> Result<()> {
        self.inner.write_i32("ArtDAQ_SetAIRTDType", val as i32)
    }

    pub fn reset_rtd_type(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIRTDType")
    }

    /// Sensor resistance in ohms at 0 degrees C; the Callendar-Van Dusen
    /// equation requires it.
    pub fn rtd_r0(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIRTDR0")
    }

    pub fn set_rtd_r0(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIRTDR0", val)
    }

    pub fn reset_rtd_r0(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIRTDR0")
    }

    /// Callendar-Van Dusen 'A' constant for custom RTDs.
    pub fn rtd_a(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIRTDA")
    }

    pub fn set_rtd_a(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIRTDA", val)
    }

    pub fn reset_rtd_a(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIRTDA")
    }

    /// Callendar-Van Dusen 'B' constant for custom RTDs.
    pub fn rtd_b(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIRTDB")
    }

    pub fn set_rtd_b(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIRTDB", val)
    }

    pub fn reset_rtd_b(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIRTDB")
    }

    /// Callendar-Van Dusen 'C' constant for custom RTDs.
    pub fn rtd_c(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIRTDC")
    }

    pub fn set_rtd_c(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIRTDC", val)
    }

    pub fn reset_rtd_c(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIRTDC")
    }

    /// Steinhart-Hart 'A' constant of the thermistor equation.
    pub fn thrmstr_a(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIThrmstrA")
    }

    pub fn set_thrmstr_a(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIThrmstrA", val)
    }

    pub fn reset_thrmstr_a(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIThrmstrA")
    }

    /// Steinhart-Hart 'B' constant of the thermistor equation.
    pub fn thrmstr_b(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIThrmstrB")
    }

    pub fn set_thrmstr_b(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIThrmstrB", val)
    }

    pub fn reset_thrmstr_b(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIThrmstrB")
    }

    /// Steinhart-Hart 'C' constant of the thermistor equation.
    pub fn thrmstr_c(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIThrmstrC")
    }

    pub fn set_thrmstr_c(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIThrmstrC", val)
    }

    pub fn reset_thrmstr_c(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIThrmstrC")
    }

    /// Reference resistor in ohms for voltage-excited thermistors; ignored
    /// for current excitation.
    pub fn thrmstr_r1(&self) -> Result<f64> {
        self.inner.read_f64("ArtDAQ_GetAIThrmstrR1")
    }

    pub fn set_thrmstr_r1(&self, val: f64) -> Result<()> {
        self.inner.write_f64("ArtDAQ_SetAIThrmstrR1", val)
    }

    pub fn reset_thrmstr_r1(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIThrmstrR1")
    }

    /// Whether the bridge shunt calibration switch is enabled.
    pub fn bridge_shuntcal_enable(&self) -> Result<bool> {
        self.inner.read_bool("ArtDAQ_GetAIBridgeShuntCalEnable")
    }

    pub fn set_bridge_shuntcal_enable(&self, val: bool) -> Result<()> {
        self.inner
            .write_bool("ArtDAQ_SetAIBridgeShuntCalEnable", val)
    }

    pub fn reset_bridge_shuntcal_enable(&self) -> Result<()> {
        self.inner.reset("ArtDAQ_ResetAIBridgeShuntCalEnable")
    }
}
