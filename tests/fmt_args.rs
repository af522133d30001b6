//! `{}` argument substitution.

use picolog::fmt::format_into;
use std::fmt::Display;

fn fmt(template: &str, args: &[&dyn Display]) -> String {
    let mut buf = [0u8; 64];
    let len = format_into(template, args, &mut buf);
    String::from_utf8(buf[..len].to_vec()).unwrap()
}

#[test]
fn sequential_args() {
    assert_eq!(fmt("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
}

#[test]
fn positional_args() {
    assert_eq!(fmt("{1} before {0}", &[&"a", &"b"]), "b before a");
}

#[test]
fn escaped_braces() {
    assert_eq!(fmt("{{}} {}", &[&7]), "{} 7");
}

#[test]
fn missing_args_are_left_verbatim() {
    assert_eq!(fmt("{} and {}", &[&"one"]), "one and {}");
    assert_eq!(fmt("{5}", &[&"one"]), "{5}");
    assert_eq!(fmt("{name}", &[&"one"]), "{name}");
}

#[test]
fn unclosed_brace() {
    assert_eq!(fmt("open { brace", &[]), "open { brace");
}

#[test]
fn stray_open_brace_before_placeholder() {
    assert_eq!(fmt("set { {} }", &[&5]), "set { 5 }");
    assert_eq!(fmt("{ {1} {0}", &[&"a", &"b"]), "{ b a");
    assert_eq!(fmt("{ {{ {}", &[&1]), "{ { 1");
}

#[test]
fn long_value_is_truncated() {
    let mut buf = [0u8; 8];
    let len = format_into("v={}", &[&"0123456789"], &mut buf);
    assert_eq!(&buf[..len], b"v=01234");
    assert_eq!(buf[len], 0);
}
