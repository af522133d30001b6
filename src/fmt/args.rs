//! Runtime argument substitution for message bodies.
//!
//! The message template only exists as a runtime string by the time it has been
//! through the style pass, so `format_args!` cannot be used here. This is the
//! small runtime subset of `std::fmt` syntax that log messages need: `{}` takes
//! the next argument, `{N}` takes argument `N`, `{{` and `}}` are literal braces.
//! Anything else between braces is copied through untouched, as is a
//! placeholder whose argument is missing.

use super::cursor::Cursor;
use std::fmt::{Display, Write};

/// Substitutes `args` into `template`, writing into `dst`. NUL-terminated; returns the length.
pub fn format_into(template: &str, args: &[&dyn Display], dst: &mut [u8]) -> usize {
    let mut out = Cursor::new(dst);
    write_args(&mut out, template, args);
    out.terminate()
}

/// Same as [`format_into`] but appends to an existing cursor.
pub fn write_args(out: &mut Cursor<'_>, template: &str, args: &[&dyn Display]) {
    let bytes = template.as_bytes();
    let mut next_arg = 0;
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if out.is_full() {
            return;
        }

        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                out.push_str(&template[run_start..=i]);
                i += 2;
                run_start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                out.push_str(&template[run_start..=i]);
                i += 2;
                run_start = i;
            }
            b'{' => {
                // A `{` reached before any `}` makes this one a literal brace.
                let Some(close) = bytes[i + 1..]
                    .iter()
                    .position(|b| *b == b'}' || *b == b'{')
                    .filter(|&offset| bytes[i + 1 + offset] == b'}')
                else {
                    i += 1;
                    continue;
                };
                let inner = &template[i + 1..i + 1 + close];

                let index = if inner.is_empty() {
                    let index = next_arg;
                    next_arg += 1;
                    Some(index)
                } else {
                    inner.parse::<usize>().ok()
                };

                if let Some(arg) = index.and_then(|index| args.get(index)) {
                    out.push_str(&template[run_start..i]);
                    // Cursor never reports an error.
                    let _ = write!(out, "{arg}");
                    i += close + 2;
                    run_start = i;
                } else {
                    i += close + 2;
                }
            }
            _ => i += 1,
        }
    }

    out.push_str(&template[run_start..]);
}
