//! Log messages sometimes need emphasis on specific words. `%RED%`, `%BOLD%` and
//! friends let callers embed styling intent in the message itself; this pass turns
//! them into SGR sequences before any argument is substituted, so a value that
//! happens to contain `%RED%` is printed as-is.

use super::cursor::Cursor;
use super::tag::{self, Tag};

/// Copies `src` into `dst`, replacing style and color tags with ANSI sequences.
///
/// With `ansi` off the tags are still consumed, just replaced by nothing.
/// Anything that is not a style or color tag (a bare `%`, `%MSG%`, `%FOO%`) is
/// copied verbatim. The result is NUL-terminated; the returned length excludes
/// the terminator.
pub fn process(src: &str, dst: &mut [u8], ansi: bool) -> usize {
    let mut out = Cursor::new(dst);
    let bytes = src.as_bytes();
    let mut i = 0;
    let mut run_start = 0;

    while i < bytes.len() && !out.is_full() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let (tag, len) = match tag::parse(&bytes[i + 1..]) {
            Some((tag @ (Tag::Style(_) | Tag::Color(_)), len)) => (tag, len),
            _ => {
                i += 1;
                continue;
            }
        };

        out.push_str(&src[run_start..i]);
        if ansi {
            match tag {
                Tag::Style(style) => out.push_whole(style.code()),
                Tag::Color(spec) => out.push_whole(spec.escape().as_str()),
                Tag::Placeholder(_) => true,
            };
        }
        i += 1 + len;
        run_start = i;
    }

    out.push_str(&src[run_start..i]);
    out.terminate()
}

/// Drops every style and color tag, leaving the text.
#[must_use]
pub fn strip_tags(msg: &str) -> String {
    let mut buf = vec![0u8; msg.len() + 1];
    let len = process(msg, &mut buf, false);
    buf.truncate(len);
    String::from_utf8(buf).unwrap_or_default()
}
