//! Tests for FFI functionality.

#![cfg(feature = "ffi")]

use picolog::{
    PICOLOG_LEVEL_DEBUG, PICOLOG_LEVEL_ERROR, PICOLOG_LEVEL_FATAL, PICOLOG_LEVEL_INFO,
    PICOLOG_LEVEL_WARN, picolog_destroy, picolog_flush, picolog_init, picolog_log,
    picolog_reparse_format, picolog_set_level, picolog_set_template,
};
use std::ffi::CString;
use std::ptr;
use std::sync::Mutex;

static CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

extern "C" fn capture(bytes: *const u8, len: usize) {
    // SAFETY: the sink hands over a valid slice for the duration of the call
    let line = unsafe { std::slice::from_raw_parts(bytes, len) };
    CAPTURED.lock().unwrap().extend_from_slice(line);
}

static CAPTURED_PARTIAL: Mutex<Vec<u8>> = Mutex::new(Vec::new());

extern "C" fn capture_partial(bytes: *const u8, len: usize) {
    // SAFETY: the sink hands over a valid slice for the duration of the call
    let line = unsafe { std::slice::from_raw_parts(bytes, len) };
    CAPTURED_PARTIAL.lock().unwrap().extend_from_slice(line);
}

extern "C" fn discard(_bytes: *const u8, _len: usize) {}

#[test]
fn test_level_constants() {
    assert_eq!(PICOLOG_LEVEL_DEBUG, 0);
    assert_eq!(PICOLOG_LEVEL_INFO, 1);
    assert_eq!(PICOLOG_LEVEL_WARN, 2);
    assert_eq!(PICOLOG_LEVEL_ERROR, 3);
    assert_eq!(PICOLOG_LEVEL_FATAL, 4);
}

#[test]
fn test_init_destroy_default_template() {
    unsafe {
        let handle = picolog_init(discard, PICOLOG_LEVEL_DEBUG, ptr::null(), 1, 1);
        assert!(!handle.is_null());
        assert_eq!(picolog_flush(handle), 0);
        picolog_destroy(handle);
    }
}

#[test]
fn test_log_through_callback() {
    let template = CString::new("[%LVL%] %FUNC%: %MSG%").unwrap();
    let message = CString::new("%RED%disk%RST% full").unwrap();
    let func = CString::new("flash_write").unwrap();
    let next = CString::new("%LVL%|%MSG%").unwrap();

    unsafe {
        let handle = picolog_init(capture, PICOLOG_LEVEL_INFO, template.as_ptr(), 0, 1);
        assert!(!handle.is_null());

        picolog_log(handle, func.as_ptr(), ptr::null(), 0, PICOLOG_LEVEL_DEBUG, message.as_ptr());
        picolog_log(handle, func.as_ptr(), ptr::null(), 0, PICOLOG_LEVEL_ERROR, message.as_ptr());

        assert_eq!(picolog_set_template(handle, next.as_ptr()), 0);
        assert_eq!(picolog_reparse_format(handle), 1);
        picolog_set_level(handle, PICOLOG_LEVEL_WARN);
        picolog_log(handle, ptr::null(), ptr::null(), 0, PICOLOG_LEVEL_INFO, message.as_ptr());
        picolog_log(handle, ptr::null(), ptr::null(), 0, PICOLOG_LEVEL_WARN, message.as_ptr());

        picolog_destroy(handle);
    }

    let captured = CAPTURED.lock().unwrap();
    assert_eq!(
        std::str::from_utf8(&captured).unwrap(),
        "[ERROR] flash_write: disk full\r\nWARNING|disk full\r\n"
    );
}

#[test]
fn test_null_arguments() {
    unsafe {
        assert_eq!(picolog_reparse_format(ptr::null_mut()), -1);
        assert_eq!(picolog_set_template(ptr::null_mut(), ptr::null()), -1);
        assert_eq!(picolog_flush(ptr::null_mut()), -1);
        picolog_set_level(ptr::null_mut(), PICOLOG_LEVEL_FATAL);
        picolog_log(ptr::null_mut(), ptr::null(), ptr::null(), 0, 0, ptr::null());
        picolog_destroy(ptr::null_mut());

        let handle = picolog_init(discard, PICOLOG_LEVEL_DEBUG, ptr::null(), 0, 0);
        assert_eq!(picolog_set_template(handle, ptr::null()), -1);
        picolog_log(handle, ptr::null(), ptr::null(), 0, 0, ptr::null());
        picolog_destroy(handle);
    }
}

#[test]
fn test_invalid_utf8_message_keeps_valid_prefix() {
    let template = CString::new("%MSG%").unwrap();
    let message = CString::new(&b"temp \xff\xfe high"[..]).unwrap();

    unsafe {
        let handle = picolog_init(capture_partial, PICOLOG_LEVEL_DEBUG, template.as_ptr(), 0, 1);
        picolog_log(handle, ptr::null(), ptr::null(), 0, PICOLOG_LEVEL_WARN, message.as_ptr());
        picolog_destroy(handle);
    }

    let captured = CAPTURED_PARTIAL.lock().unwrap();
    assert_eq!(std::str::from_utf8(&captured).unwrap(), "temp \r\n");
}
