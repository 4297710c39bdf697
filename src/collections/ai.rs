use std::ffi::{CString, c_char};
use std::sync::Arc;

use tracing::info;

use crate::channel::Channel;
use crate::channels::AIChannel;
use crate::collections::assigned_channel_name;
use crate::constants::{
    BridgeConfiguration, BridgeUnits, CjcSource, Coupling, CurrentUnits, ExcitationSource,
    ResistanceConfiguration, ResistanceUnits, RtdType, ShuntResistorLocation, StrainGageBridgeType,
    StrainUnits, TemperatureUnits, TerminalConfiguration, ThermocoupleType, VoltageUnits,
};
use crate::error::Result;
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Factory for the analog input channels of a task.
pub struct AIChannelCollection {
    driver: Arc<Driver>,
    handle: TaskHandle,
}

pub struct AiVoltageChanOptions {
    pub terminal_config: TerminalConfiguration,
    pub min_val: f64,
    pub max_val: f64,
    pub units: VoltageUnits,
    pub custom_scale_name: String,
}

impl Default for AiVoltageChanOptions {
    fn default() -> Self {
        Self {
            terminal_config: TerminalConfiguration::Default,
            min_val: -10.0,
            max_val: 10.0,
            units: VoltageUnits::Volts,
            custom_scale_name: String::new(),
        }
    }
}

pub struct AiVoltageIepeChanOptions {
    pub terminal_config: TerminalConfiguration,
    pub coupling: Coupling,
    pub min_val: f64,
    pub max_val: f64,
    pub current_excit_source: ExcitationSource,
    /// Excitation in amperes; the sensor documentation gives the value.
    pub current_excit_val: f64,
}

impl Default for AiVoltageIepeChanOptions {
    fn default() -> Self {
        Self {
            terminal_config: TerminalConfiguration::Default,
            coupling: Coupling::Dc,
            min_val: -5.0,
            max_val: 5.0,
            current_excit_source: ExcitationSource::Internal,
            current_excit_val: 0.004,
        }
    }
}

pub struct AiCurrentChanOptions {
    pub terminal_config: TerminalConfiguration,
    pub min_val: f64,
    pub max_val: f64,
    pub units: CurrentUnits,
    pub shunt_resistor_location: ShuntResistorLocation,
    /// Resistance in ohms of an external shunt resistor.
    pub ext_shunt_resistor_val: f64,
    pub custom_scale_name: String,
}

impl Default for AiCurrentChanOptions {
    fn default() -> Self {
        Self {
            terminal_config: TerminalConfiguration::Default,
            min_val: -5.0,
            max_val: 5.0,
            units: CurrentUnits::Amps,
            shunt_resistor_location: ShuntResistorLocation::Internal,
            ext_shunt_resistor_val: 0.004,
            custom_scale_name: String::new(),
        }
    }
}

pub struct AiThermocoupleChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: TemperatureUnits,
    pub thermocouple_type: ThermocoupleType,
    pub cjc_source: CjcSource,
    /// Cold-junction temperature when `cjc_source` is a constant value, in
    /// the units of the measurement.
    pub cjc_val: f64,
    /// Channel that acquires the cold-junction temperature when
    /// `cjc_source` is a channel.
    pub cjc_channel: String,
}

impl Default for AiThermocoupleChanOptions {
    fn default() -> Self {
        Self {
            min_val: 0.0,
            max_val: 100.0,
            units: TemperatureUnits::DegC,
            thermocouple_type: ThermocoupleType::J,
            cjc_source: CjcSource::BuiltIn,
            cjc_val: 25.0,
            cjc_channel: String::new(),
        }
    }
}

pub struct AiRtdChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: TemperatureUnits,
    pub rtd_type: RtdType,
    pub resistance_config: ResistanceConfiguration,
    pub current_excit_source: ExcitationSource,
    pub current_excit_val: f64,
    /// Sensor resistance in ohms at 0 degrees C.
    pub r0: f64,
}

impl Default for AiRtdChanOptions {
    fn default() -> Self {
        Self {
            min_val: 0.0,
            max_val: 100.0,
            units: TemperatureUnits::DegC,
            rtd_type: RtdType::Pt3750,
            resistance_config: ResistanceConfiguration::FourWire,
            current_excit_source: ExcitationSource::Internal,
            current_excit_val: 0.004,
            r0: 100.0,
        }
    }
}

pub struct AiThrmstrIexChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: TemperatureUnits,
    pub resistance_config: ResistanceConfiguration,
    pub current_excit_source: ExcitationSource,
    pub current_excit_val: f64,
    /// Steinhart-Hart thermistor equation constants.
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for AiThrmstrIexChanOptions {
    fn default() -> Self {
        Self {
            min_val: -5.0,
            max_val: 5.0,
            units: TemperatureUnits::DegC,
            resistance_config: ResistanceConfiguration::TwoWire,
            current_excit_source: ExcitationSource::Internal,
            current_excit_val: 1.0,
            a: 1.0,
            b: 1.0,
            c: 1.0,
        }
    }
}

pub struct AiThrmstrVexChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: TemperatureUnits,
    pub resistance_config: ResistanceConfiguration,
    pub voltage_excit_source: ExcitationSource,
    pub voltage_excit_val: f64,
    /// Steinhart-Hart thermistor equation constants.
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Reference resistor in ohms; ignored for current excitation.
    pub r1: f64,
}

impl Default for AiThrmstrVexChanOptions {
    fn default() -> Self {
        Self {
            min_val: -5.0,
            max_val: 5.0,
            units: TemperatureUnits::DegC,
            resistance_config: ResistanceConfiguration::TwoWire,
            voltage_excit_source: ExcitationSource::Internal,
            voltage_excit_val: 1.0,
            a: 1.0,
            b: 1.0,
            c: 1.0,
            r1: 1.0,
        }
    }
}

pub struct AiResistanceChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: ResistanceUnits,
    pub resistance_config: ResistanceConfiguration,
    pub current_excit_source: ExcitationSource,
    pub current_excit_val: f64,
    pub custom_scale_name: String,
}

impl Default for AiResistanceChanOptions {
    fn default() -> Self {
        Self {
            min_val: -5.0,
            max_val: 5.0,
            units: ResistanceUnits::Ohms,
            resistance_config: ResistanceConfiguration::TwoWire,
            current_excit_source: ExcitationSource::Internal,
            current_excit_val: 1.0,
            custom_scale_name: String::new(),
        }
    }
}

pub struct AiStrainGageChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: StrainUnits,
    pub strain_config: StrainGageBridgeType,
    pub voltage_excit_source: ExcitationSource,
    pub voltage_excit_val: f64,
    /// Sensitivity of the gage: change in resistance per change in strain.
    pub gage_factor: f64,
    /// Bridge output voltage while not under load; subtracted from every
    /// measurement before scaling.
    pub initial_bridge_voltage: f64,
    /// Bridge resistance in ohms while not under load.
    pub nominal_gage_resistance: f64,
    /// Ratio of lateral to axial strain in the measured material.
    pub poisson_ratio: f64,
    /// Lead wire resistance in ohms, assumed equal for all leads.
    pub lead_wire_resistance: f64,
    pub custom_scale_name: String,
}

impl Default for AiStrainGageChanOptions {
    fn default() -> Self {
        Self {
            min_val: -0.001,
            max_val: 0.001,
            units: StrainUnits::Strain,
            strain_config: StrainGageBridgeType::FullBridgeI,
            voltage_excit_source: ExcitationSource::Internal,
            voltage_excit_val: 2.5,
            gage_factor: 2.0,
            initial_bridge_voltage: 0.0,
            nominal_gage_resistance: 350.0,
            poisson_ratio: 0.3,
            lead_wire_resistance: 0.0,
            custom_scale_name: String::new(),
        }
    }
}

pub struct AiBridgeChanOptions {
    pub min_val: f64,
    pub max_val: f64,
    pub units: BridgeUnits,
    pub bridge_config: BridgeConfiguration,
    pub voltage_excit_source: ExcitationSource,
    pub voltage_excit_val: f64,
    /// Bridge resistance in ohms while not under load.
    pub nominal_bridge_resistance: f64,
    pub custom_scale_name: String,
}

impl Default for AiBridgeChanOptions {
    fn default() -> Self {
        Self {
            min_val: -0.1,
            max_val: 0.1,
            units: BridgeUnits::VoltsPerVolt,
            bridge_config: BridgeConfiguration::HalfBridge,
            voltage_excit_source: ExcitationSource::Internal,
            voltage_excit_val: 2.5,
            nominal_bridge_resistance: 0.001,
            custom_scale_name: String::new(),
        }
    }
}

impl AIChannelCollection {
    pub fn new(driver: Arc<Driver>, handle: TaskHandle) -> Self {
        Self { driver, handle }
    }

    fn create_chan(&self, physical_channel: &str, name_to_assign: &str) -> Result<AIChannel> {
        let name = assigned_channel_name(physical_channel, name_to_assign);
        Ok(AIChannel {
            inner: Channel::new(self.driver.clone(), self.handle, name)?,
        })
    }

    /// Creates channel(s) to measure voltage.
    pub fn add_ai_voltage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiVoltageChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            i32,
            f64,
            f64,
            i32,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIVoltageChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog input voltage channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.terminal_config as i32,
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring an IEPE sensor with excitation supplied
    /// from the measurement device.
    pub fn add_ai_voltage_iepe_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiVoltageIepeChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            i32,
            i32,
            f64,
            f64,
            i32,
            f64,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIVoltageIEPEChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding analog input IEPE voltage channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.terminal_config as i32,
                opts.coupling as i32,
                opts.min_val,
                opts.max_val,
                opts.current_excit_source as i32,
                opts.current_excit_val,
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) to measure current through a shunt resistor.
    pub fn add_ai_current_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiCurrentChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            i32,
            f64,
            f64,
            i32,
            i32,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAICurrentChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog input current channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.terminal_config as i32,
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.shunt_resistor_location as i32,
                opts.ext_shunt_resistor_val,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring temperature with a thermocouple.
    pub fn add_ai_thermocouple_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiThermocoupleChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIThrmcplChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_cjc_channel = CString::new(opts.cjc_channel.as_str())?;
        info!("adding analog input thermocouple channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.thermocouple_type as i32,
                opts.cjc_source as i32,
                opts.cjc_val,
                c_cjc_channel.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring temperature with an RTD.
    pub fn add_ai_rtd_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiRtdChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            i32,
            f64,
            f64,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIRTDChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding analog input RTD channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.rtd_type as i32,
                opts.resistance_config as i32,
                opts.current_excit_source as i32,
                opts.current_excit_val,
                opts.r0,
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring temperature with a current-excited
    /// thermistor.
    pub fn add_ai_thrmstr_chan_iex(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiThrmstrIexChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            f64,
            f64,
            f64,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIThrmstrChanIex")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding analog input thermistor channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.resistance_config as i32,
                opts.current_excit_source as i32,
                opts.current_excit_val,
                opts.a,
                opts.b,
                opts.c,
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring temperature with a voltage-excited
    /// thermistor.
    pub fn add_ai_thrmstr_chan_vex(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiThrmstrVexChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            f64,
            f64,
            f64,
            f64,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIThrmstrChanVex")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding analog input thermistor channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.resistance_config as i32,
                opts.voltage_excit_source as i32,
                opts.voltage_excit_val,
                opts.a,
                opts.b,
                opts.c,
                opts.r1,
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) to measure resistance.
    pub fn add_ai_resistance_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiResistanceChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIResistanceChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog input resistance channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.resistance_config as i32,
                opts.current_excit_source as i32,
                opts.current_excit_val,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring strain with a gage bridge.
    pub fn add_ai_straingage_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiStrainGageChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            f64,
            f64,
            f64,
            f64,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIStrainGageChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog input strain gage channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.strain_config as i32,
                opts.voltage_excit_source as i32,
                opts.voltage_excit_val,
                opts.gage_factor,
                opts.initial_bridge_voltage,
                opts.nominal_gage_resistance,
                opts.poisson_ratio,
                opts.lead_wire_resistance,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }

    /// Creates channel(s) measuring voltage ratios from a Wheatstone
    /// bridge.
    pub fn add_ai_bridge_chan(
        &self,
        physical_channel: &str,
        name_to_assign: &str,
        opts: AiBridgeChanOptions,
    ) -> Result<AIChannel> {
        type CreateFn = unsafe extern "C" fn(
            TaskHandle,
            *const c_char,
            *const c_char,
            f64,
            f64,
            i32,
            i32,
            i32,
            f64,
            f64,
            *const c_char,
        ) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateAIBridgeChan")?;
        let c_physical = CString::new(physical_channel)?;
        let c_name = CString::new(name_to_assign)?;
        let c_scale = CString::new(opts.custom_scale_name.as_str())?;
        info!("adding analog input bridge channel {physical_channel}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_physical.as_ptr(),
                c_name.as_ptr(),
                opts.min_val,
                opts.max_val,
                opts.units as i32,
                opts.bridge_config as i32,
                opts.voltage_excit_source as i32,
                opts.voltage_excit_val,
                opts.nominal_bridge_resistance,
                c_scale.as_ptr(),
            )
        };
        self.driver.check(status)?;
        self.create_chan(physical_channel, name_to_assign)
    }
}
