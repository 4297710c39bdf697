//! End-to-end tests against a stub driver.
//!
//! The stub is a [`SymbolSource`] whose entry points are local `extern "C"`
//! functions, so the full dispatch path (symbol registry, transmuted call,
//! status translation, buffer probing) is exercised without the vendor
//! library. The stubs share process-global state, so tests run serially.

use std::ffi::{CStr, c_char, c_void};
use std::ptr;
use std::sync::atomic::{AtomicI32, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use serial_test::serial;

use artdaq::{
    AIChannelCollection, AiVoltageChanOptions, DaqError, Driver, RawSymbol, SymbolSource,
    TaskHandle,
};

/// Status the driver reports when a string no longer fits the buffer.
const STATUS_BUFFER_TOO_SMALL: i32 = -200228;

const ERROR_MESSAGE: &str = "stub: operation rejected";
const INPUT_SRC_VALUE: &str = "dev1/_calSignal0";

/// Status the next create call returns.
static CREATE_STATUS: AtomicI32 = AtomicI32::new(0);
/// Status the next set call returns.
static SET_STATUS: AtomicI32 = AtomicI32::new(0);
/// Times the extended-error-info entry point was invoked (probe calls
/// included).
static ERROR_FETCHES: AtomicUsize = AtomicUsize::new(0);
/// Remaining "buffer too small" rejections the string getter reports
/// before following the size-probe protocol.
static INPUT_SRC_REJECTIONS: AtomicU32 = AtomicU32::new(0);
/// Arguments captured from the last create call.
static LAST_CREATE: Mutex<Option<CreateArgs>> = Mutex::new(None);

#[derive(Debug, Clone, PartialEq)]
struct CreateArgs {
    physical_channel: String,
    name_to_assign: String,
    terminal_config: i32,
    min_val: f64,
    max_val: f64,
    units: i32,
}

fn reset_stub_state() {
    CREATE_STATUS.store(0, Ordering::SeqCst);
    SET_STATUS.store(0, Ordering::SeqCst);
    ERROR_FETCHES.store(0, Ordering::SeqCst);
    INPUT_SRC_REJECTIONS.store(0, Ordering::SeqCst);
    *LAST_CREATE.lock().unwrap() = None;
}

unsafe fn decode(ptr: *const c_char) -> String {
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Writes `value` through the size-probe protocol: report the required
/// size to a zero-length probe, copy once the buffer is large enough.
unsafe fn answer_string(value: &str, buf: *mut c_char, size: u32) -> i32 {
    let bytes = value.as_bytes();
    let needed = (bytes.len() + 1) as u32;
    if size < needed {
        return needed as i32;
    }
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast(), bytes.len());
        *buf.add(bytes.len()) = 0;
    }
    0
}

unsafe extern "C" fn get_extended_error_info(buf: *mut c_char, size: u32) -> i32 {
    ERROR_FETCHES.fetch_add(1, Ordering::SeqCst);
    unsafe { answer_string(ERROR_MESSAGE, buf, size) }
}

unsafe extern "C" fn create_ai_voltage_chan(
    _handle: TaskHandle,
    physical_channel: *const c_char,
    name_to_assign: *const c_char,
    terminal_config: i32,
    min_val: f64,
    max_val: f64,
    units: i32,
    _custom_scale_name: *const c_char,
) -> i32 {
    *LAST_CREATE.lock().unwrap() = Some(CreateArgs {
        physical_channel: unsafe { decode(physical_channel) },
        name_to_assign: unsafe { decode(name_to_assign) },
        terminal_config,
        min_val,
        max_val,
        units,
    });
    CREATE_STATUS.load(Ordering::SeqCst)
}

unsafe extern "C" fn get_ai_input_src(
    _handle: TaskHandle,
    _name: *const c_char,
    buf: *mut c_char,
    size: u32,
) -> i32 {
    if INPUT_SRC_REJECTIONS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return STATUS_BUFFER_TOO_SMALL;
    }
    unsafe { answer_string(INPUT_SRC_VALUE, buf, size) }
}

unsafe extern "C" fn get_ai_max(_handle: TaskHandle, _name: *const c_char, val: *mut f64) -> i32 {
    unsafe { *val = 9.5 };
    0
}

unsafe extern "C" fn set_ai_max(_handle: TaskHandle, _name: *const c_char, _val: f64) -> i32 {
    SET_STATUS.load(Ordering::SeqCst)
}

type CreateAiVoltageFn = unsafe extern "C" fn(
    TaskHandle,
    *const c_char,
    *const c_char,
    i32,
    f64,
    f64,
    i32,
    *const c_char,
) -> i32;
type ErrorInfoFn = unsafe extern "C" fn(*mut c_char, u32) -> i32;
type GetStringAttrFn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut c_char, u32) -> i32;
type GetF64AttrFn = unsafe extern "C" fn(TaskHandle, *const c_char, *mut f64) -> i32;
type SetF64AttrFn = unsafe extern "C" fn(TaskHandle, *const c_char, f64) -> i32;

struct StubSource;

impl SymbolSource for StubSource {
    fn resolve(&self, name: &str) -> artdaq::Result<RawSymbol> {
        let addr: *const c_void = match name {
            "ArtDAQ_GetExtendedErrorInfo" => {
                get_extended_error_info as ErrorInfoFn as *const c_void
            }
            "ArtDAQ_CreateAIVoltageChan" => {
                create_ai_voltage_chan as CreateAiVoltageFn as *const c_void
            }
            "ArtDAQ_GetAIInputSrc" => get_ai_input_src as GetStringAttrFn as *const c_void,
            "ArtDAQ_GetAIMax" => get_ai_max as GetF64AttrFn as *const c_void,
            "ArtDAQ_SetAIMax" => set_ai_max as SetF64AttrFn as *const c_void,
            _ => {
                return Err(DaqError::Linkage {
                    reason: format!("stub has no entry point {name}"),
                });
            }
        };
        Ok(RawSymbol::new(addr))
    }
}

fn stub_collection() -> AIChannelCollection {
    static INIT_TRACING: Once = Once::new();
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });

    let driver = Arc::new(Driver::with_source(Box::new(StubSource)));
    // The stub never dereferences the handle.
    let handle = unsafe { TaskHandle::from_raw(ptr::null_mut()) };
    AIChannelCollection::new(driver, handle)
}

#[test]
#[serial]
fn create_forwards_arguments_and_synthesizes_range_name() {
    reset_stub_state();
    let ai = stub_collection();
    let chan = ai
        .add_ai_voltage_chan("dev1/ai0:3", "sense", AiVoltageChanOptions::default())
        .unwrap();
    assert_eq!(chan.name(), "sense0:3");

    let created = LAST_CREATE.lock().unwrap().clone().unwrap();
    assert_eq!(created.physical_channel, "dev1/ai0:3");
    assert_eq!(created.name_to_assign, "sense");
    assert_eq!(created.terminal_config, -1);
    assert_eq!(created.min_val, -10.0);
    assert_eq!(created.max_val, 10.0);
    assert_eq!(created.units, 10348);
}

#[test]
#[serial]
fn create_without_name_uses_the_physical_specifier() {
    reset_stub_state();
    let ai = stub_collection();
    let chan = ai
        .add_ai_voltage_chan("dev1/ai2", "", AiVoltageChanOptions::default())
        .unwrap();
    assert_eq!(chan.name(), "dev1/ai2");
}

#[test]
#[serial]
fn failed_create_raises_and_builds_no_channel() {
    reset_stub_state();
    CREATE_STATUS.store(-200077, Ordering::SeqCst);
    let ai = stub_collection();
    let err = ai
        .add_ai_voltage_chan("dev1/ai0", "sense", AiVoltageChanOptions::default())
        .unwrap_err();
    match err {
        DaqError::Driver { code, message } => {
            assert_eq!(code, -200077);
            assert_eq!(message, ERROR_MESSAGE);
        }
        other => panic!("expected a driver error, got {other:?}"),
    }
}

#[test]
#[serial]
fn warning_status_fetches_the_message_but_succeeds() {
    reset_stub_state();
    let ai = stub_collection();
    let chan = ai
        .add_ai_voltage_chan("dev1/ai0", "", AiVoltageChanOptions::default())
        .unwrap();

    SET_STATUS.store(4, Ordering::SeqCst);
    assert_eq!(ERROR_FETCHES.load(Ordering::SeqCst), 0);
    chan.set_max(5.0).unwrap();
    assert!(ERROR_FETCHES.load(Ordering::SeqCst) > 0);
}

#[test]
#[serial]
fn string_attribute_survives_bounded_buffer_rejections() {
    reset_stub_state();
    INPUT_SRC_REJECTIONS.store(3, Ordering::SeqCst);
    let ai = stub_collection();
    let chan = ai
        .add_ai_voltage_chan("dev1/ai0", "", AiVoltageChanOptions::default())
        .unwrap();
    assert_eq!(chan.input_src().unwrap(), INPUT_SRC_VALUE);
}

#[test]
#[serial]
fn attribute_reads_query_the_driver_every_time() {
    reset_stub_state();
    let ai = stub_collection();
    let chan = ai
        .add_ai_voltage_chan("dev1/ai0", "", AiVoltageChanOptions::default())
        .unwrap();
    assert_eq!(chan.max().unwrap(), 9.5);
    assert_eq!(chan.max().unwrap(), 9.5);
}
