use std::ffi::{CString, c_char};
use std::sync::Arc;

use tracing::info;

use crate::channel::Channel;
use crate::channels::DIOChannel;
use crate::collections::assigned_line_name;
use crate::constants::LineGrouping;
use crate::error::Result;
use crate::ffi::Driver;
use crate::task::TaskHandle;

/// Factory for the digital input channels of a task.
pub struct DIChannelCollection {
    driver: Arc<Driver>,
    handle: TaskHandle,
}

impl DIChannelCollection {
    pub fn new(driver: Arc<Driver>, handle: TaskHandle) -> Self {
        Self { driver, handle }
    }

    /// Creates channel(s) to measure digital signals. Lines group into one
    /// virtual channel or one channel per line according to
    /// `line_grouping`; entire ports must be grouped as one channel.
    pub fn add_di_chan(
        &self,
        lines: &str,
        name_to_assign: &str,
        line_grouping: LineGrouping,
    ) -> Result<DIOChannel> {
        type CreateFn =
            unsafe extern "C" fn(TaskHandle, *const c_char, *const c_char, i32) -> i32;
        let cfunc: CreateFn = self.driver.entry("ArtDAQ_CreateDIChan")?;
        let c_lines = CString::new(lines)?;
        let c_name = CString::new(name_to_assign)?;
        info!("adding digital input channel {lines}");
        let status = unsafe {
            cfunc(
                self.handle,
                c_lines.as_ptr(),
                c_name.as_ptr(),
                line_grouping as i32,
            )
        };
        self.driver.check(status)?;

        let name = assigned_line_name(lines, name_to_assign, line_grouping);
        Ok(DIOChannel {
            inner: Channel::new(self.driver.clone(), self.handle, name)?,
            line_grouping,
        })
    }
}
