use std::ffi::{CString, c_char};
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, read_driver_string};
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Initial probe size for string attribute queries. Most attribute values
/// fit on the first call; the probe loop handles the rest.
const STRING_PROBE_SIZE: u32 = 256;

type GetF64Fn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut f64) -> i32;
type SetF64Fn = unsafe extern "C" fn(TaskHandle, *const c_char, f64) -> i32;
type GetI32Fn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut i32) -> i32;
type SetI32Fn = unsafe extern "C" fn(TaskHandle, *const c_char, i32) -> i32;
type GetBoolFn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut u32) -> i32;
type SetBoolFn = unsafe extern "C" fn(TaskHandle, *const c_char, u32) -> i32;
type GetStringFn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut c_char, u32) -> i32;
type SetStringFn = unsafe extern "C" fn(TaskHandle, *const c_char, *const c_char) -> i32;
type ResetFn = unsafe extern "C" fn(TaskHandle, *const c_char) -> i32;

/// A virtual channel bound to a driver task.
///
/// Identity is the (task handle, channel name) pair, fixed at construction.
/// Nothing is cached host-side: every attribute read issues a fresh native
/// query, every write a native command, every reset a restore-to-default
/// command. Dropping the host object leaves the driver-side channel alive
/// for the lifetime of the task.
pub struct Channel {
    pub(crate) driver: Arc<Driver>,
    pub(crate) handle: TaskHandle,
    name: String,
    cname: CString,
}

impl Channel {
    pub(crate) fn new(driver: Arc<Driver>, handle: TaskHandle, name: String) -> Result<Self> {
        let cname = CString::new(name.as_str())?;
        Ok(Self {
            driver,
            handle,
            name,
            cname,
        })
    }

    /// Virtual channel name this object addresses the driver with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task the channel was created on.
    pub fn task_handle(&self) -> TaskHandle {
        self.handle
    }

    pub(crate) fn read_f64(&self, entry: &'static str) -> Result<f64> {
        let cfunc: GetF64Fn = self.driver.entry(entry)?;
        let mut val = 0f64;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), &mut val) };
        self.driver.check(status)?;
        Ok(val)
    }

    pub(crate) fn write_f64(&self, entry: &'static str, val: f64) -> Result<()> {
        let cfunc: SetF64Fn = self.driver.entry(entry)?;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), val) };
        self.driver.check(status)
    }

    pub(crate) fn read_i32(&self, entry: &'static str) -> Result<i32> {
        let cfunc: GetI32Fn = self.driver.entry(entry)?;
        let mut val = 0i32;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), &mut val) };
        self.driver.check(status)?;
        Ok(val)
    }

    pub(crate) fn write_i32(&self, entry: &'static str, val: i32) -> Result<()> {
        let cfunc: SetI32Fn = self.driver.entry(entry)?;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), val) };
        self.driver.check(status)
    }

    // Booleans cross the boundary as 32-bit integers, the ABI's bool32.
    pub(crate) fn read_bool(&self, entry: &'static str) -> Result<bool> {
        let cfunc: GetBoolFn = self.driver.entry(entry)?;
        let mut val = 0u32;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), &mut val) };
        self.driver.check(status)?;
        Ok(val != 0)
    }

    pub(crate) fn write_bool(&self, entry: &'static str, val: bool) -> Result<()> {
        let cfunc: SetBoolFn = self.driver.entry(entry)?;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), val as u32) };
        self.driver.check(status)
    }

    pub(crate) fn read_string(&self, entry: &'static str) -> Result<String> {
        let cfunc: GetStringFn = self.driver.entry(entry)?;
        let (status, value) = read_driver_string(STRING_PROBE_SIZE, |buf, size| unsafe {
            cfunc(self.handle, self.cname.as_ptr(), buf, size)
        });
        self.driver.check(status)?;
        Ok(value)
    }

    pub(crate) fn write_string(&self, entry: &'static str, val: &str) -> Result<()> {
        let cfunc: SetStringFn = self.driver.entry(entry)?;
        let cval = CString::new(val)?;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr(), cval.as_ptr()) };
        self.driver.check(status)
    }

    /// Restores the driver's default for one attribute of this channel.
    pub(crate) fn reset(&self, entry: &'static str) -> Result<()> {
        let cfunc: ResetFn = self.driver.entry(entry)?;
        let status = unsafe { cfunc(self.handle, self.cname.as_ptr()) };
        self.driver.check(status)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("name", &self.name).finish()
    }
}
