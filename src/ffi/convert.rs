use std::ffi::{c_char, CString};
use std::ptr;

use tracing::debug;

use super::{ffi_guard, into_raw, to_cstring};
use tamil_core::convert::convert_text;
use tamil_core::mapping::MappingTable;
use tamil_core::translit::transliterate;

/// Transliterate one word with the global table.
/// Returns null on a null or non-UTF-8 argument; free with `tamil_string_free`.
#[no_mangle]
pub extern "C" fn tamil_transliterate_word(word: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: word_str = word,
    );
    into_raw(&transliterate(MappingTable::global(), word_str))
}

/// Result of `tamil_convert_text`. `status` is empty when the text produced
/// no event or conversion was disabled.
#[repr(C)]
pub struct TamilConversion {
    pub text: *const c_char,
    pub status: *const c_char,
    _owned: *mut (CString, CString),
}

impl TamilConversion {
    fn empty() -> Self {
        Self {
            text: ptr::null(),
            status: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }
}

#[no_mangle]
pub extern "C" fn tamil_convert_text(text: *const c_char, enabled: u8) -> TamilConversion {
    ffi_guard!(TamilConversion::empty();
        str: text_str = text,
    );
    let conversion = convert_text(MappingTable::global(), text_str, enabled != 0);
    let status = conversion
        .status
        .map(|e| e.to_string())
        .unwrap_or_default();
    debug!(enabled, status = %status, "ffi convert_text");

    let text_c = to_cstring(&conversion.text);
    let status_c = to_cstring(&status);
    let text_ptr = text_c.as_ptr();
    let status_ptr = status_c.as_ptr();
    let owned = Box::into_raw(Box::new((text_c, status_c)));
    TamilConversion {
        text: text_ptr,
        status: status_ptr,
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn tamil_conversion_free(result: TamilConversion) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}
