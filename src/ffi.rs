//! C-ABI bindings so firmware written in C can log through picolog.
//!
//! The sink is a plain C callback receiving each rendered line; that is usually a
//! thin wrapper around the board's UART or USB CDC write routine.

#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use crate::internal;
use crate::level::Level;
use crate::logger::{CallSite, Logger};
use crate::output::Sink;

/// Named constants so C callers avoid magic numbers in their log calls.
pub const PICOLOG_LEVEL_DEBUG: c_int = 0;
pub const PICOLOG_LEVEL_INFO: c_int = 1;
pub const PICOLOG_LEVEL_WARN: c_int = 2;
pub const PICOLOG_LEVEL_ERROR: c_int = 3;
pub const PICOLOG_LEVEL_FATAL: c_int = 4;

/// Receives one rendered line: pointer and length, no terminator included.
pub type PicologWriteFn = extern "C" fn(bytes: *const u8, len: usize);

/// Forwards every line to a C function.
#[derive(Debug, Clone, Copy)]
pub struct CallbackSink {
    write: PicologWriteFn,
}

impl CallbackSink {
    #[must_use]
    pub const fn new(write: PicologWriteFn) -> Self {
        Self { write }
    }
}

impl Sink for CallbackSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        (self.write)(bytes.as_ptr(), bytes.len());
        Ok(())
    }
}

/// Opaque pointer for C callers; hides the Rust logger behind a stable ABI boundary.
pub struct PicologHandle {
    logger: Logger,
}

/// Unknown values map to info rather than silently dropping everything.
const fn level_from_int(level: c_int) -> Level {
    match level {
        PICOLOG_LEVEL_DEBUG => Level::Debug,
        PICOLOG_LEVEL_WARN => Level::Warn,
        PICOLOG_LEVEL_ERROR => Level::Error,
        PICOLOG_LEVEL_FATAL => Level::Fatal,
        _ => Level::Info,
    }
}

/// Reads an optional C string. `None` for `NULL` or invalid UTF-8.
///
/// # Safety
/// `s` must be `NULL` or a valid null-terminated string that outlives `'a`.
unsafe fn opt_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    // SAFETY: non-null and the caller guarantees termination and lifetime
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Reads a C string, keeping the valid UTF-8 prefix when the rest is not.
///
/// # Safety
/// `s` must be `NULL` or a valid null-terminated string that outlives `'a`.
unsafe fn utf8_prefix<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    // SAFETY: non-null and the caller guarantees termination and lifetime
    let bytes = unsafe { CStr::from_ptr(s) }.to_bytes();
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            internal::warn(&format!(
                "Invalid UTF-8 in message at byte {}, truncating",
                e.valid_up_to()
            ));
            std::str::from_utf8(&bytes[..e.valid_up_to()]).ok()
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Creates a logger writing through `write`.
///
/// `template` may be `NULL` for the default template. Returns `NULL` when
/// `template` is not valid UTF-8.
///
/// # Safety
/// `template` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_init(
    write: PicologWriteFn,
    level: c_int,
    template: *const c_char,
    ansi: c_int,
    style_tags: c_int,
) -> *mut PicologHandle {
    let mut builder = Logger::builder()
        .level(level_from_int(level))
        .ansi_styling(ansi != 0)
        .style_tags(style_tags != 0)
        .sink(CallbackSink::new(write));

    if !template.is_null() {
        // SAFETY: non-null and the caller guarantees a valid string
        let Some(template) = (unsafe { opt_str(template) }) else {
            internal::error("Invalid UTF-8 in template");
            return ptr::null_mut();
        };
        builder = builder.template(template.to_owned());
    }

    internal::debug("FFI logger initialized");
    Box::into_raw(Box::new(PicologHandle {
        logger: builder.build(),
    }))
}

/// Releases the handle. Must be called to avoid leaking memory.
///
/// # Safety
/// `handle` must be a pointer returned by `picolog_init` or `NULL`, and must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_destroy(handle: *mut PicologHandle) {
    if !handle.is_null() {
        // SAFETY: non-null and created by Box::into_raw
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Re-tokenizes the template, adopting one queued by `picolog_set_template`.
///
/// Returns 1 on success, 0 when another thread is logging, -1 on a `NULL` handle.
///
/// # Safety
/// `handle` must be a valid handle or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_reparse_format(handle: *mut PicologHandle) -> c_int {
    if handle.is_null() {
        return -1;
    }
    // SAFETY: non-null and valid
    let ctx = unsafe { &*handle };
    c_int::from(ctx.logger.reparse_format())
}

/// Queues a new template; it takes effect on the next `picolog_reparse_format`.
///
/// Returns 0 on success, -1 on `NULL` arguments or invalid UTF-8.
///
/// # Safety
/// `handle` must be a valid handle or `NULL`; `template` a valid null-terminated string or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_set_template(
    handle: *mut PicologHandle,
    template: *const c_char,
) -> c_int {
    if handle.is_null() {
        return -1;
    }
    // SAFETY: caller guarantees a valid string or NULL
    let Some(template) = (unsafe { opt_str(template) }) else {
        return -1;
    };
    // SAFETY: non-null and valid
    let ctx = unsafe { &*handle };
    ctx.logger.set_template(template.to_owned());
    0
}

/// # Safety
/// `handle` must be a valid handle or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_set_level(handle: *mut PicologHandle, level: c_int) {
    if handle.is_null() {
        return;
    }
    // SAFETY: non-null and valid
    let ctx = unsafe { &*handle };
    ctx.logger.set_level(level_from_int(level));
}

// ============================================================================
// Logging
// ============================================================================

/// Logs a message the caller has already formatted (e.g. with `snprintf`).
///
/// Style tags in `message` are still processed. There are no arguments, so
/// `{}` is printed as typed while `{{` and `}}` collapse to one brace.
/// A message that is not valid UTF-8 is logged up to its first bad byte.
/// `func` and `file` may be `NULL`.
///
/// # Safety
/// `handle` must be a valid handle or `NULL`; the strings valid null-terminated strings or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_log(
    handle: *mut PicologHandle,
    func: *const c_char,
    file: *const c_char,
    line: u32,
    level: c_int,
    message: *const c_char,
) {
    if handle.is_null() {
        return;
    }
    // SAFETY: caller guarantees valid strings or NULL
    let (func, file, message) = unsafe { (opt_str(func), opt_str(file), utf8_prefix(message)) };
    let Some(message) = message else {
        return;
    };

    // SAFETY: non-null and valid
    let ctx = unsafe { &*handle };
    let site = CallSite::new(func.unwrap_or_default(), file.unwrap_or_default(), line);
    ctx.logger.log(&site, level_from_int(level), message, &[]);
}

/// Flushes the sink.
///
/// # Safety
/// `handle` must be a valid handle or `NULL`.
///
/// # Returns
/// 0 on success, non-zero on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn picolog_flush(handle: *mut PicologHandle) -> c_int {
    if handle.is_null() {
        return -1;
    }
    // SAFETY: non-null and valid
    let ctx = unsafe { &*handle };
    match ctx.logger.flush() {
        Ok(()) => 0,
        Err(e) => {
            internal::error(&format!("Flush failed: {e}"));
            1
        }
    }
}
