use std::collections::HashMap;
use std::ffi::{OsStr, c_void};
use std::mem;
use std::sync::RwLock;

use libloading::Library;
use tracing::info;

use crate::error::{DaqError, Result};

/// Library the driver vendor installs alongside the hardware support files.
#[cfg(windows)]
const DRIVER_LIBRARY: &str = "Art_DAQ.dll";
#[cfg(not(windows))]
const DRIVER_LIBRARY: &str = "libart_daq.so";

/// Address of one resolved native entry point.
#[derive(Debug, Clone, Copy)]
pub struct RawSymbol(*const c_void);

impl RawSymbol {
    pub fn new(addr: *const c_void) -> Self {
        RawSymbol(addr)
    }

    pub fn addr(self) -> *const c_void {
        self.0
    }
}

// A symbol address is immutable once resolved; sharing it across threads is
// no different from sharing the function it names.
unsafe impl Send for RawSymbol {}
unsafe impl Sync for RawSymbol {}

/// Resolves entry-point names to addresses.
///
/// Production code uses [`DriverLibrary`]; tests substitute instrumented
/// stubs backed by local `extern "C"` functions.
pub trait SymbolSource: Send + Sync {
    fn resolve(&self, name: &str) -> Result<RawSymbol>;
}

/// The vendor driver's dynamic library.
pub struct DriverLibrary {
    lib: Library,
}

impl DriverLibrary {
    /// Opens the driver under its installed name.
    pub fn open_default() -> Result<Self> {
        Self::open(DRIVER_LIBRARY)
    }

    /// Opens the driver from an explicit path.
    pub fn open(path: impl AsRef<OsStr>) -> Result<Self> {
        let path = path.as_ref();
        // Safety: loading the vendor library runs its initialization
        // routines; there is nothing this layer can check beyond the load
        // succeeding.
        let lib = unsafe { Library::new(path) }.map_err(|err| DaqError::Linkage {
            reason: format!("failed to load {}: {err}", path.to_string_lossy()),
        })?;
        info!("loaded native driver library {}", path.to_string_lossy());
        Ok(Self { lib })
    }
}

impl SymbolSource for DriverLibrary {
    fn resolve(&self, name: &str) -> Result<RawSymbol> {
        let symbol = unsafe { self.lib.get::<unsafe extern "C" fn()>(name.as_bytes()) }.map_err(
            |err| DaqError::Linkage {
                reason: format!("unresolved entry point {name}: {err}"),
            },
        )?;
        Ok(RawSymbol::new(*symbol as *const c_void))
    }
}

/// Handle to the loaded driver: a symbol source plus the registry of entry
/// points already resolved through it.
///
/// The registry is owned here and passed by reference (via `Arc<Driver>`)
/// to every channel and collection; there is no ambient global state.
pub struct Driver {
    source: Box<dyn SymbolSource>,
    symbols: RwLock<HashMap<&'static str, RawSymbol>>,
}

impl Driver {
    /// Loads the driver library under its installed name.
    pub fn load() -> Result<Self> {
        Ok(Self::with_source(Box::new(DriverLibrary::open_default()?)))
    }

    /// Loads the driver library from an explicit path.
    pub fn load_from(path: impl AsRef<OsStr>) -> Result<Self> {
        Ok(Self::with_source(Box::new(DriverLibrary::open(path)?)))
    }

    /// Builds a driver over an arbitrary symbol source.
    pub fn with_source(source: Box<dyn SymbolSource>) -> Self {
        Self {
            source,
            symbols: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the entry point `name` as a callable of type `F`, resolving
    /// and caching the symbol on first use.
    ///
    /// Concurrent first use resolves the symbol exactly once: a read-locked
    /// fast path, then the check is repeated under the write lock before
    /// resolving, so callers racing past the first check cannot register the
    /// entry point twice.
    ///
    /// `F` must be the `unsafe extern "C" fn` type matching the driver's
    /// signature for `name`; calling the returned value is as unsafe as any
    /// other FFI call.
    pub fn entry<F: Copy>(&self, name: &'static str) -> Result<F> {
        debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        if let Some(symbol) = self
            .symbols
            .read()
            .expect("symbol registry poisoned")
            .get(name)
        {
            let addr = symbol.addr();
            return Ok(unsafe { mem::transmute_copy::<*const c_void, F>(&addr) });
        }

        let mut symbols = self.symbols.write().expect("symbol registry poisoned");
        let symbol = match symbols.get(name) {
            Some(symbol) => *symbol,
            None => {
                let symbol = self.source.resolve(name)?;
                symbols.insert(name, symbol);
                symbol
            }
        };
        let addr = symbol.addr();
        Ok(unsafe { mem::transmute_copy::<*const c_void, F>(&addr) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    unsafe extern "C" fn forty_two() -> i32 {
        42
    }

    struct CountingSource {
        resolved: Arc<AtomicUsize>,
    }

    impl SymbolSource for CountingSource {
        fn resolve(&self, name: &str) -> Result<RawSymbol> {
            self.resolved.fetch_add(1, Ordering::SeqCst);
            match name {
                "ArtDAQ_FortyTwo" => {
                    let f: unsafe extern "C" fn() -> i32 = forty_two;
                    Ok(RawSymbol::new(f as *const c_void))
                }
                _ => Err(DaqError::Linkage {
                    reason: format!("unresolved entry point {name}"),
                }),
            }
        }
    }

    fn counting_driver() -> (Driver, Arc<AtomicUsize>) {
        let resolved = Arc::new(AtomicUsize::new(0));
        let driver = Driver::with_source(Box::new(CountingSource {
            resolved: resolved.clone(),
        }));
        (driver, resolved)
    }

    #[test]
    fn resolves_and_dispatches_entry_point() {
        let (driver, _) = counting_driver();
        let cfunc: unsafe extern "C" fn() -> i32 = driver.entry("ArtDAQ_FortyTwo").unwrap();
        assert_eq!(unsafe { cfunc() }, 42);
    }

    #[test]
    fn unknown_entry_point_is_a_linkage_error() {
        let (driver, _) = counting_driver();
        let result = driver.entry::<unsafe extern "C" fn() -> i32>("ArtDAQ_Missing");
        assert!(matches!(result, Err(DaqError::Linkage { .. })));
    }

    #[test]
    fn concurrent_first_use_registers_once() {
        let (driver, resolved) = counting_driver();
        let driver = Arc::new(driver);
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let driver = driver.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    let cfunc: unsafe extern "C" fn() -> i32 =
                        driver.entry("ArtDAQ_FortyTwo").unwrap();
                    unsafe { cfunc() }
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(resolved.load(Ordering::SeqCst), 1);
        assert_eq!(driver.symbols.read().unwrap().len(), 1);
    }

    #[test]
    fn repeated_use_hits_the_cache() {
        let (driver, resolved) = counting_driver();
        for _ in 0..5 {
            let _: unsafe extern "C" fn() -> i32 = driver.entry("ArtDAQ_FortyTwo").unwrap();
        }
        assert_eq!(resolved.load(Ordering::SeqCst), 1);
    }
}
