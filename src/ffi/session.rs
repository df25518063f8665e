use std::ffi::{c_char, CString};
use std::path::Path;
use std::ptr;
use std::sync::{Arc, OnceLock};

use super::{ffi_close, ffi_guard, owned_new, to_cstring};
use tamil_core::mapping::MappingTable;
use tamil_session::{PhoneticSession, SessionError, SessionResponse};

/// Opaque session handle for C.
pub struct TamilSession {
    inner: PhoneticSession,
}

fn shared_table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| Arc::new(MappingTable::global().clone()))
        .clone()
}

/// Snapshot of a session after an operation.
#[repr(C)]
pub struct TamilSessionResponse {
    pub output: *const c_char,
    pub status: *const c_char,
    /// 1 = Tamil, 0 = English.
    pub tamil_mode: u8,
    _owned: *mut (CString, CString),
}

impl TamilSessionResponse {
    fn empty() -> Self {
        Self {
            output: ptr::null(),
            status: ptr::null(),
            tamil_mode: 0,
            _owned: ptr::null_mut(),
        }
    }

    fn from_response(resp: SessionResponse) -> Self {
        let output_c = to_cstring(&resp.output);
        let status_c = to_cstring(&resp.status);
        let output = output_c.as_ptr();
        let status = status_c.as_ptr();
        Self {
            output,
            status,
            tamil_mode: resp.mode.is_enabled() as u8,
            _owned: Box::into_raw(Box::new((output_c, status_c))),
        }
    }
}

/// New session over the global mapping table.
#[no_mangle]
pub extern "C" fn tamil_session_new() -> *mut TamilSession {
    owned_new(TamilSession {
        inner: PhoneticSession::new(shared_table()),
    })
}

ffi_close!(tamil_session_free, TamilSession);

#[no_mangle]
pub extern "C" fn tamil_session_set_input(
    session: *mut TamilSession,
    text: *const c_char,
) -> TamilSessionResponse {
    ffi_guard!(TamilSessionResponse::empty();
        mut: session = session,
        str: text_str = text,
    );
    TamilSessionResponse::from_response(session.inner.set_input(text_str))
}

#[no_mangle]
pub extern "C" fn tamil_session_toggle_mode(session: *mut TamilSession) -> TamilSessionResponse {
    ffi_guard!(TamilSessionResponse::empty();
        mut: session = session,
    );
    TamilSessionResponse::from_response(session.inner.toggle_mode())
}

#[no_mangle]
pub extern "C" fn tamil_session_clear(session: *mut TamilSession) -> TamilSessionResponse {
    ffi_guard!(TamilSessionResponse::empty();
        mut: session = session,
    );
    TamilSessionResponse::from_response(session.inner.clear())
}

/// Save the session output to `path`.
/// Returns 0 on success, 1 when there is nothing to save, 2 on a write
/// error, -1 on a null or non-UTF-8 argument.
#[no_mangle]
pub extern "C" fn tamil_session_save(session: *mut TamilSession, path: *const c_char) -> i32 {
    ffi_guard!(-1;
        mut: session = session,
        str: path_str = path,
    );
    match session.inner.save_to(Path::new(path_str)) {
        Ok(_) => 0,
        Err(SessionError::EmptyOutput) => 1,
        Err(SessionError::Io { .. }) => 2,
    }
}

/// Current status line of the session; free with `tamil_string_free`.
#[no_mangle]
pub extern "C" fn tamil_session_status(session: *const TamilSession) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        ref: session = session,
    );
    super::into_raw(session.inner.status())
}

#[no_mangle]
pub extern "C" fn tamil_session_response_free(response: TamilSessionResponse) {
    if !response._owned.is_null() {
        unsafe {
            drop(Box::from_raw(response._owned));
        }
    }
}
