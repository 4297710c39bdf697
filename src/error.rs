use std::ffi::{NulError, c_char};

use thiserror::Error;
use tracing::{error, warn};

use crate::ffi::Driver;

/// Status the driver returns when the caller's string buffer no longer fits
/// the value; handled internally by the probe loop, never surfaced.
pub(crate) const STATUS_BUFFER_TOO_SMALL: i32 = -200228;

#[derive(Error, Debug)]
pub enum DaqError {
    /// The native library or one of its entry points cannot be resolved.
    /// Fatal at this layer; not retried.
    #[error("native driver linkage failed: {reason}")]
    Linkage { reason: String },

    /// A native call returned a negative status. Carries the code and the
    /// driver's extended message; never retried or suppressed.
    #[error("driver call failed with status {code}: {message}")]
    Driver { code: i32, message: String },

    /// A host-supplied string contains an interior NUL byte and cannot
    /// cross the C boundary.
    #[error("string argument contains an interior NUL byte")]
    InvalidName(#[from] NulError),

    /// The driver returned an integer outside the closed set of codes for
    /// an enumerated attribute.
    #[error("driver returned unrecognized value {value} for {attribute}")]
    UnexpectedValue {
        attribute: &'static str,
        value: i32,
    },
}

pub type Result<T> = std::result::Result<T, DaqError>;

impl Driver {
    /// Translates a native status code.
    ///
    /// Zero is success. A positive code is a warning: the operation took
    /// effect, so the extended message is surfaced through the log and the
    /// call succeeds. A negative code aborts the calling operation with the
    /// code and decoded message.
    pub fn check(&self, status: i32) -> Result<()> {
        if status == 0 {
            return Ok(());
        }
        let message = self.extended_error_info();
        if status < 0 {
            error!("driver call failed with status {status}: {message}");
            return Err(DaqError::Driver {
                code: status,
                message,
            });
        }
        warn!("driver returned warning status {status}: {message}");
        Ok(())
    }

    /// Fetches the driver's message for the most recent non-zero status.
    ///
    /// Failure to produce a message must not mask the status being
    /// translated, so every failure path degrades to a placeholder.
    fn extended_error_info(&self) -> String {
        type GetExtendedErrorInfo = unsafe extern "C" fn(*mut c_char, u32) -> i32;
        let Ok(cfunc) = self.entry::<GetExtendedErrorInfo>("ArtDAQ_GetExtendedErrorInfo") else {
            return String::from("<no extended error info>");
        };
        let (status, message) = read_driver_string(0, |buf, size| unsafe { cfunc(buf, size) });
        if status < 0 || message.is_empty() {
            return String::from("<no extended error info>");
        }
        message
    }
}

/// Drives a native string query through the driver's size-probe protocol.
///
/// The driver reports the size it needs as a positive return when called
/// with a zero-length probe, and `STATUS_BUFFER_TOO_SMALL` when the value
/// grew between the probe and the read; the probe restarts from zero in
/// that case. Terminates as soon as the driver returns any other status
/// with a non-probe buffer. The final status still goes through
/// [`Driver::check`] at the call site.
pub(crate) fn read_driver_string(
    initial_size: u32,
    mut call: impl FnMut(*mut c_char, u32) -> i32,
) -> (i32, String) {
    let mut temp_size = initial_size;
    loop {
        let mut buf = vec![0u8; (temp_size as usize).max(1)];
        let status = call(buf.as_mut_ptr().cast(), temp_size);
        if status == STATUS_BUFFER_TOO_SMALL {
            // Required size changed between calls; probe again.
            temp_size = 0;
        } else if status > 0 && temp_size == 0 {
            // Probe answered with the required size; fetch for real.
            temp_size = status as u32;
        } else {
            return (status, decode_driver_bytes(&buf));
        }
    }
}

/// Decodes a NUL-terminated driver string. The driver's text is a fixed
/// single-byte encoding, so a lossy UTF-8 read never mangles valid output.
fn decode_driver_bytes(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_up_to_the_terminator() {
        assert_eq!(decode_driver_bytes(b"dev1/ai0\0garbage"), "dev1/ai0");
        assert_eq!(decode_driver_bytes(b"\0"), "");
    }

    #[test]
    fn probe_loop_adopts_reported_size() {
        let value = b"ai0:3";
        let mut calls = 0;
        let (status, text) = read_driver_string(0, |buf, size| {
            calls += 1;
            if size == 0 {
                return (value.len() + 1) as i32;
            }
            assert!(size as usize > value.len());
            unsafe {
                std::ptr::copy_nonoverlapping(value.as_ptr(), buf.cast(), value.len());
            }
            0
        });
        assert_eq!(status, 0);
        assert_eq!(text, "ai0:3");
        assert_eq!(calls, 2);
    }

    #[test]
    fn probe_loop_restarts_after_too_small() {
        let value = b"PFI0";
        let mut rejections = 3;
        let (status, text) = read_driver_string(256, |buf, size| {
            if rejections > 0 {
                rejections -= 1;
                return STATUS_BUFFER_TOO_SMALL;
            }
            if size == 0 {
                return (value.len() + 1) as i32;
            }
            unsafe {
                std::ptr::copy_nonoverlapping(value.as_ptr(), buf.cast(), value.len());
            }
            0
        });
        assert_eq!(status, 0);
        assert_eq!(text, "PFI0");
    }
}
