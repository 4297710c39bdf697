//! Closed sets of option codes the driver accepts.
//!
//! Each variant carries the exact numeric code of the native ABI; values
//! cross the boundary verbatim as `value as i32`. The driver is authoritative
//! for which combinations a given device supports.

/// Input terminal configuration for an analog channel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalConfiguration {
    /// Let the driver pick the default for the channel.
    Default = -1,
    Rse = 10083,
    Nrse = 10078,
    Differential = 10106,
    PseudoDifferential = 12529,
}

impl TerminalConfiguration {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Self::Default),
            10083 => Some(Self::Rse),
            10078 => Some(Self::Nrse),
            10106 => Some(Self::Differential),
            12529 => Some(Self::PseudoDifferential),
            _ => None,
        }
    }
}

/// Coupling between the source signal and the measurement circuit.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    Ac = 10045,
    Dc = 10050,
    Gnd = 10066,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoltageUnits {
    Volts = 10348,
    FromCustomScale = 10065,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentUnits {
    Amps = 10342,
    FromCustomScale = 10065,
}

/// Location of the shunt resistor for current measurements and shunt
/// calibration.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuntResistorLocation {
    Internal = 10200,
    External = 10167,
}

/// Units for thermocouple, RTD, and thermistor measurements.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnits {
    DegC = 10143,
    DegF = 10144,
    Kelvins = 10325,
    DegR = 10145,
}

/// Thermocouple composition types; each covers a different range.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermocoupleType {
    J = 10072,
    K = 10073,
    N = 10077,
    R = 10082,
    S = 10085,
    T = 10086,
    B = 10047,
    E = 10055,
}

/// Source of cold-junction compensation for thermocouple channels.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjcSource {
    BuiltIn = 10200,
    ConstantValue = 10116,
    Channel = 10113,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistanceUnits {
    Ohms = 10384,
    FromCustomScale = 10065,
}

/// RTD sensor types by temperature coefficient.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtdType {
    Pt3750 = 12481,
    Pt3851 = 10071,
    Pt3911 = 12482,
    Pt3916 = 10069,
    Pt3920 = 10053,
    Pt3928 = 12483,
    /// Callendar-Van Dusen constants supplied per channel.
    Custom = 10137,
}

impl RtdType {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            12481 => Some(Self::Pt3750),
            10071 => Some(Self::Pt3851),
            12482 => Some(Self::Pt3911),
            10069 => Some(Self::Pt3916),
            10053 => Some(Self::Pt3920),
            12483 => Some(Self::Pt3928),
            10137 => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Wiring configuration for resistance-based measurements.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistanceConfiguration {
    TwoWire = 2,
    ThreeWire = 3,
    FourWire = 4,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcitationSource {
    Internal = 10200,
    External = 10167,
    None = 10230,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrainUnits {
    Strain = 10299,
    FromCustomScale = 10065,
}

/// Bridge configuration of a strain gage channel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrainGageBridgeType {
    FullBridgeI = 10183,
    FullBridgeII = 10184,
    FullBridgeIII = 10185,
    HalfBridgeI = 10188,
    HalfBridgeII = 10189,
    QuarterBridgeI = 10271,
    QuarterBridgeII = 10272,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeUnits {
    VoltsPerVolt = 15896,
    MillivoltsPerVolt = 15897,
    FromCustomScale = 10065,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeConfiguration {
    FullBridge = 10182,
    HalfBridge = 10187,
    QuarterBridge = 10270,
    NoBridge = 10228,
}

/// How often the driver measures ground and subtracts it from samples.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoZeroType {
    None = 10230,
    Once = 10244,
    EverySample = 10164,
}

impl AutoZeroType {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            10230 => Some(Self::None),
            10244 => Some(Self::Once),
            10164 => Some(Self::EverySample),
            _ => None,
        }
    }
}

/// Measurement an analog input channel was created for.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AIMeasurementType {
    Voltage = 10322,
    Current = 10134,
    Resistance = 10278,
    StrainGage = 10300,
    Thermocouple = 10303,
    Thermistor = 10302,
    Rtd = 10301,
    Bridge = 15908,
}

impl AIMeasurementType {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            10322 => Some(Self::Voltage),
            10134 => Some(Self::Current),
            10278 => Some(Self::Resistance),
            10300 => Some(Self::StrainGage),
            10303 => Some(Self::Thermocouple),
            10302 => Some(Self::Thermistor),
            10301 => Some(Self::Rtd),
            15908 => Some(Self::Bridge),
            _ => None,
        }
    }
}

/// Kind of signal an analog output channel generates.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AOOutputChannelType {
    Voltage = 10322,
    Current = 10134,
    FunctionGeneration = 14750,
}

impl AOOutputChannelType {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            10322 => Some(Self::Voltage),
            10134 => Some(Self::Current),
            14750 => Some(Self::FunctionGeneration),
            _ => None,
        }
    }
}

/// How digital lines group into virtual channels.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineGrouping {
    ChanPerLine = 0,
    ChanForAllLines = 1,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising = 10280,
    Falling = 10171,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDirection {
    CountUp = 10128,
    CountDown = 10124,
    ExternallyControlled = 10326,
}

/// Quadrature decoding applied to an encoder channel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderType {
    X1 = 10090,
    X2 = 10091,
    X4 = 10092,
    TwoPulseCounting = 10313,
}

/// A/B states that identify the Z-index reload position.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderZIndexPhase {
    AHighBHigh = 10040,
    AHighBLow = 10041,
    ALowBHigh = 10042,
    ALowBLow = 10043,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnits {
    Degrees = 10146,
    Radians = 10273,
    Ticks = 10304,
    FromCustomScale = 10065,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyUnits {
    Hz = 10373,
    Ticks = 10304,
}

/// Logic level of a counter output terminal.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High = 10192,
    Low = 10214,
}

impl Level {
    pub(crate) fn from_raw(value: i32) -> Option<Self> {
        match value {
            10192 => Some(Self::High),
            10214 => Some(Self::Low),
            _ => None,
        }
    }
}
