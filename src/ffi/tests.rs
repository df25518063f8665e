use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

unsafe fn read(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_str().unwrap().to_string()
}

#[test]
fn test_ffi_version() {
    let v = unsafe { read(tamil_engine_version()) };
    assert_eq!(v, "0.1.0");
}

#[test]
fn test_ffi_transliterate_word() {
    let word = CString::new("vaNak;kam;").unwrap();
    let out = tamil_transliterate_word(word.as_ptr());
    assert!(!out.is_null());
    assert_eq!(unsafe { read(out) }, "வணக்கம்");
    tamil_string_free(out);
}

#[test]
fn test_ffi_transliterate_null() {
    let out = tamil_transliterate_word(ptr::null());
    assert!(out.is_null());
    tamil_string_free(out);
}

#[test]
fn test_ffi_transliterate_invalid_utf8() {
    let bytes = [0xffu8, 0xfe, 0x00];
    let out = tamil_transliterate_word(bytes.as_ptr() as *const c_char);
    assert!(out.is_null());
}

#[test]
fn test_ffi_convert_text_enabled() {
    let text = CString::new("am;maa k;").unwrap();
    let result = tamil_convert_text(text.as_ptr(), 1);
    unsafe {
        assert_eq!(read(result.text), "அம்மா க்");
        assert_eq!(read(result.status), "Pulli applied: க் (Mei form)");
    }
    tamil_conversion_free(result);
}

#[test]
fn test_ffi_convert_text_disabled() {
    let text = CString::new("Hello  World").unwrap();
    let result = tamil_convert_text(text.as_ptr(), 0);
    unsafe {
        assert_eq!(read(result.text), "Hello  World");
        assert_eq!(read(result.status), "");
    }
    tamil_conversion_free(result);
}

#[test]
fn test_ffi_convert_text_null() {
    let result = tamil_convert_text(ptr::null(), 1);
    assert!(result.text.is_null());
    assert!(result.status.is_null());
    tamil_conversion_free(result);
}

#[test]
fn test_ffi_init_rejects_bad_input() {
    let bad = CString::new("[stop]\ntoken = \"\"\n").unwrap();
    assert_eq!(tamil_mapping_init(bad.as_ptr()), 1);
    assert_eq!(tamil_mapping_init(ptr::null()), -1);

    let bad = CString::new("[reference]\nvowel_columns = 0\n").unwrap();
    assert_eq!(tamil_settings_init(bad.as_ptr()), 1);
    assert_eq!(tamil_settings_init(ptr::null()), -1);
}

#[test]
fn test_ffi_trace_init_null_is_noop() {
    tamil_trace_init(ptr::null());
}

#[test]
fn test_ffi_session_lifecycle() {
    let session = tamil_session_new();
    assert!(!session.is_null());

    let text = CString::new("kaa").unwrap();
    let resp = tamil_session_set_input(session, text.as_ptr());
    unsafe {
        assert_eq!(read(resp.output), "கா");
        assert_eq!(read(resp.status), "");
    }
    assert_eq!(resp.tamil_mode, 1);
    tamil_session_response_free(resp);

    let resp = tamil_session_toggle_mode(session);
    unsafe {
        assert_eq!(read(resp.output), "kaa");
        assert_eq!(read(resp.status), "Mode: English");
    }
    assert_eq!(resp.tamil_mode, 0);
    tamil_session_response_free(resp);

    let resp = tamil_session_clear(session);
    unsafe {
        assert_eq!(read(resp.output), "");
        assert_eq!(read(resp.status), "Output cleared");
    }
    tamil_session_response_free(resp);

    let status = tamil_session_status(session);
    assert_eq!(unsafe { read(status) }, "Output cleared");
    tamil_string_free(status);

    tamil_session_free(session);
}

#[test]
fn test_ffi_session_save() {
    let dir = tempfile::tempdir().unwrap();
    let session = tamil_session_new();
    let target = CString::new(dir.path().join("out").to_str().unwrap()).unwrap();

    assert_eq!(tamil_session_save(session, target.as_ptr()), 1);

    let text = CString::new("sri").unwrap();
    tamil_session_response_free(tamil_session_set_input(session, text.as_ptr()));
    assert_eq!(tamil_session_save(session, target.as_ptr()), 0);
    let saved = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(saved, "ஸ்ரீ");

    let missing = CString::new(dir.path().join("no/such/dir.txt").to_str().unwrap()).unwrap();
    assert_eq!(tamil_session_save(session, missing.as_ptr()), 2);

    tamil_session_free(session);
}

#[test]
fn test_ffi_session_null_safety() {
    let text = CString::new("ka").unwrap();
    let resp = tamil_session_set_input(ptr::null_mut(), text.as_ptr());
    assert!(resp.output.is_null());
    tamil_session_response_free(resp);

    let session = tamil_session_new();
    let resp = tamil_session_set_input(session, ptr::null());
    assert!(resp.output.is_null());
    tamil_session_response_free(resp);

    assert_eq!(tamil_session_save(ptr::null_mut(), text.as_ptr()), -1);
    assert!(tamil_session_status(ptr::null()).is_null());
    tamil_session_free(session);
    tamil_session_free(ptr::null_mut());
}
