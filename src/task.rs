use std::ffi::c_void;

/// Borrowed handle to a driver acquisition task.
///
/// Task lifecycle (create/start/stop/clear) belongs to the caller; channels
/// and calibration operations only pass the handle through to the native
/// layer and never free it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct TaskHandle(*mut c_void);

impl TaskHandle {
    /// Wraps a raw task handle obtained from the native driver.
    ///
    /// # Safety
    ///
    /// `raw` must be a live task handle and must stay valid for as long as
    /// any channel or calibration object borrowing it is used.
    pub unsafe fn from_raw(raw: *mut c_void) -> Self {
        TaskHandle(raw)
    }

    pub fn as_raw(self) -> *mut c_void {
        self.0
    }
}

// The handle is an opaque pointer value; the driver serializes access to the
// task it names, and concurrent use of one task is the caller's concern.
unsafe impl Send for TaskHandle {}
unsafe impl Sync for TaskHandle {}
