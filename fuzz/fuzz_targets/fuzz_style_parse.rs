#![no_main]
use libfuzzer_sys::fuzz_target;
use picolog::fmt::{format_into, style};

fuzz_target!(|data: &str| {
    // Must not panic on any input, including unclosed/malformed tags
    let mut styled = [0u8; 64];
    let len = style::process(data, &mut styled, true);
    let body = std::str::from_utf8(&styled[..len]).expect("style pass keeps UTF-8");

    let mut out = [0u8; 64];
    let len = format_into(body, &[&1u8, &"x"], &mut out);
    assert!(std::str::from_utf8(&out[..len]).is_ok());

    let _ = style::strip_tags(data);
});
