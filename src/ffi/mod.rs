//! C ABI for host editors.
//!
//! Every function tolerates null or non-UTF-8 arguments by returning an
//! empty result. Strings handed out by the engine are owned by the engine and
//! must be released with the matching `*_free` function.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;

pub mod convert;
pub mod session;

#[cfg(test)]
mod tests;

pub use convert::*;
pub use session::*;

use tamil_core::mapping::MappingTable;
use tamil_core::settings;

// --- Owned-pointer helpers ---

/// Allocate a value on the heap and return a raw pointer suitable for FFI.
/// The caller is responsible for eventually passing the pointer to [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Free a heap-allocated value previously created by [`owned_new`].
/// No-op if `ptr` is null.
///
/// # Safety
/// `ptr` must have been produced by [`owned_new`] and not freed already.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Interior NULs cannot cross the C boundary; they are dropped.
pub(crate) fn to_cstring(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

/// Validate FFI arguments and bind them as safe Rust values, returning
/// `$on_err` from the calling function if any check fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `*const c_char`, bind as `&str`. |
/// | `ref: $name = $ptr` | Null-check `*const T`, bind as `&T`. |
/// | `mut: $name = $ptr` | Null-check `*mut T`, bind as `&mut T`. |
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; mut: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &mut *$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// Define an `extern "C"` function that frees a heap-allocated resource.
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- Top-level functions ---

#[no_mangle]
pub extern "C" fn tamil_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn tamil_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}

/// Install a custom mapping table before first use.
/// Returns 0 on success, 1 if the TOML is invalid, 2 if already initialized,
/// -1 on a null or non-UTF-8 argument.
#[no_mangle]
pub extern "C" fn tamil_mapping_init(toml: *const c_char) -> i32 {
    use tamil_core::mapping::MappingConfigError;

    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match MappingTable::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(MappingConfigError::AlreadyInitialized) => 2,
        Err(_) => 1,
    }
}

/// Install custom settings before first use. Same return codes as
/// [`tamil_mapping_init`].
#[no_mangle]
pub extern "C" fn tamil_settings_init(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match settings::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(settings::SettingsError::AlreadyInitialized) => 2,
        Err(_) => 1,
    }
}

/// Free a string returned by the engine. No-op if `ptr` is null.
#[no_mangle]
pub extern "C" fn tamil_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr));
    }
}

/// Hand an owned copy of `s` to C; release with [`tamil_string_free`].
pub(crate) fn into_raw(s: &str) -> *mut c_char {
    to_cstring(s).into_raw()
}
