use std::ffi::{CString, c_char};
use std::sync::Arc;

use tracing::info;

use crate::constants::ShuntResistorLocation;
use crate::error::Result;
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Calibration operations for a task and its device.
///
/// Every operation is one native call plus status translation; the driver
/// performs the actual calibration math and populates any output values.
pub struct Calibration {
    driver: Arc<Driver>,
    handle: TaskHandle,
}

impl Calibration {
    pub fn new(driver: Arc<Driver>, handle: TaskHandle) -> Self {
        Self { driver, handle }
    }

    /// Runs the device's self-calibration procedure.
    pub fn self_cal(&self, device_name: &str) -> Result<()> {
        type SelfCalFn = unsafe extern "C" fn(*const c_char) -> i32;
        let cfunc: SelfCalFn = self.driver.entry("ArtDAQ_SelfCal")?;
        let c_device = CString::new(device_name)?;
        info!("self-calibrating device {device_name}");
        let status = unsafe { cfunc(c_device.as_ptr()) };
        self.driver.check(status)
    }

    /// Queries the calibration `(offset, code_width)` pair for one analog
    /// input channel at the given range and sample clock.
    pub fn ai_cal_offset_and_gain(
        &self,
        device_name: &str,
        channel: u32,
        min_val: f64,
        max_val: f64,
        sample_clock: f64,
    ) -> Result<(f64, f64)> {
        self.cal_offset_and_gain(
            "ArtDAQ_GetAICalOffsetAndGain",
            device_name,
            channel,
            min_val,
            max_val,
            sample_clock,
        )
    }

    /// Queries the calibration `(offset, code_width)` pair for one analog
    /// output channel at the given range and sample clock.
    pub fn ao_cal_offset_and_gain(
        &self,
        device_name: &str,
        channel: u32,
        min_val: f64,
        max_val: f64,
        sample_clock: f64,
    ) -> Result<(f64, f64)> {
        self.cal_offset_and_gain(
            "ArtDAQ_GetAOCalOffsetAndGain",
            device_name,
            channel,
            min_val,
            max_val,
            sample_clock,
        )
    }

    fn cal_offset_and_gain(
        &self,
        entry: &'static str,
        device_name: &str,
        channel: u32,
        min_val: f64,
        max_val: f64,
        sample_clock: f64,
    ) -> Result<(f64, f64)> {
        type CalOffsetGainFn =
            unsafe extern "C" fn(*const c_char, u32, f64, f64, f64, *mut f64, *mut f64) -> i32;
        let cfunc: CalOffsetGainFn = self.driver.entry(entry)?;
        let c_device = CString::new(device_name)?;
        let mut offset = 0f64;
        let mut code_width = 0f64;
        let status = unsafe {
            cfunc(
                c_device.as_ptr(),
                channel,
                min_val,
                max_val,
                sample_clock,
                &mut offset,
                &mut code_width,
            )
        };
        self.driver.check(status)?;
        Ok((offset, code_width))
    }

    /// Nulls out the offset of the bridge channels named by `channel` (all
    /// bridge channels of the task when empty).
    pub fn perform_bridge_offset_nulling_cal(&self, channel: &str) -> Result<()> {
        type NullingCalFn = unsafe extern "C" fn(TaskHandle, *const c_char) -> i32;
        let cfunc: NullingCalFn = self.driver.entry("ArtDAQ_PerformBridgeOffsetNullingCal")?;
        let c_channel = CString::new(channel)?;
        info!("performing bridge offset nulling calibration");
        let status = unsafe { cfunc(self.handle, c_channel.as_ptr()) };
        self.driver.check(status)
    }

    /// Shunt-calibrates strain channels with the given shunt resistor.
    /// `skip_unsupported` skips channels the procedure does not apply to
    /// instead of failing on them.
    pub fn perform_strain_shunt_cal(
        &self,
        channel: &str,
        shunt_resistor_val: f64,
        shunt_resistor_location: ShuntResistorLocation,
        skip_unsupported: bool,
    ) -> Result<()> {
        type StrainShuntCalFn =
            unsafe extern "C" fn(TaskHandle, *const c_char, f64, i32, bool) -> i32;
        let cfunc: StrainShuntCalFn = self.driver.entry("ArtDAQ_PerformStrainShuntCal")?;
        let c_channel = CString::new(channel)?;
        info!("performing strain shunt calibration");
        let status = unsafe {
            cfunc(
                self.handle,
                c_channel.as_ptr(),
                shunt_resistor_val,
                shunt_resistor_location as i32,
                skip_unsupported,
            )
        };
        self.driver.check(status)
    }

    /// Shunt-calibrates bridge channels with the given shunt resistor and
    /// nominal bridge resistance.
    pub fn perform_bridge_shunt_cal(
        &self,
        channel: &str,
        shunt_resistor_val: f64,
        shunt_resistor_location: ShuntResistorLocation,
        bridge_resistance: f64,
        skip_unsupported: bool,
    ) -> Result<()> {
        type BridgeShuntCalFn =
            unsafe extern "C" fn(TaskHandle, *const c_char, f64, i32, f64, bool) -> i32;
        let cfunc: BridgeShuntCalFn = self.driver.entry("ArtDAQ_PerformBridgeShuntCal")?;
        let c_channel = CString::new(channel)?;
        info!("performing bridge shunt calibration");
        let status = unsafe {
            cfunc(
                self.handle,
                c_channel.as_ptr(),
                shunt_resistor_val,
                shunt_resistor_location as i32,
                bridge_resistance,
                skip_unsupported,
            )
        };
        self.driver.check(status)
    }
}
