#![no_main]
use libfuzzer_sys::fuzz_target;
use picolog::fmt::{FormatTemplate, FormatValues};
use picolog::{Level, MonotonicClock, NoContext};

fuzz_target!(|data: (&str, &str)| {
    let (template, message) = data;
    // Must not panic on any template string
    let template = FormatTemplate::parse(template.to_string());

    let values = FormatValues {
        level: Level::Warn,
        func: "fuzz",
        file: "fuzz.rs",
        line: 7,
        message,
        ansi: true,
    };

    // Small buffers exercise every truncation path
    for size in [0usize, 1, 2, 3, 17, 256] {
        let mut out = vec![0xAAu8; size];
        let len = template.render(&mut out, &values, &MonotonicClock::new(), &NoContext);
        assert!(len < size.max(1));
        if size > 0 {
            assert!(std::str::from_utf8(&out[..len]).is_ok());
        }
    }
});
