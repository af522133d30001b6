//! Tests for logger functionality.

use picolog::{
    CallSite, Clock, Level, Logger, LoggerBuilder, NoContext, Sink, debug, error, fatal, info,
    log, warn,
};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone, Default)]
struct Capture {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl Sink for Capture {
    fn write(&mut self, bytes: &[u8]) -> Result<(), picolog::Error> {
        self.bytes.lock().unwrap().extend_from_slice(bytes);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn millis_since_start(&self) -> u64 {
        1_500
    }
}

fn builder(capture: &Capture, template: &'static str) -> LoggerBuilder {
    Logger::builder()
        .template(template)
        .ansi_styling(false)
        .clock(FixedClock)
        .context(NoContext)
        .sink(capture.clone())
}

const SITE: CallSite<'static> = CallSite::new("main", "main.rs", 10);

#[test]
fn builder_defaults() {
    let logger = Logger::builder().build();
    assert_eq!(logger.min_level(), Level::Debug);
    assert!(logger.ansi_styling());
    assert!(logger.style_tags());
    assert_eq!(logger.buffer_size(), 256);
    assert_eq!(logger.template(), picolog::fmt::DEFAULT_TEMPLATE);
}

#[test]
fn build_sized_uses_requested_buffer() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").build_sized::<8>();
    assert_eq!(logger.buffer_size(), 8);
    logger.log(&SITE, Level::Info, "0123456789", &[]);
    assert_eq!(capture.text(), "01234\r\n");
}

#[test]
fn renders_full_pipeline() {
    let capture = Capture::default();
    let logger = builder(&capture, "[%TSTMP%] [%LVL%] [%FILE%:%LINE%]: %MSG%").build();
    logger.log(&SITE, Level::Warn, "%RED%temp{}%RST% {}C", &[&"!", &71]);
    assert_eq!(capture.text(), "[1.500] [WARNING] [main.rs:10]: temp! 71C\r\n");
}

#[test]
fn style_tags_off_leaves_tags() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").style_tags(false).build();
    logger.log(&SITE, Level::Info, "%RED%x%RST%", &[]);
    assert_eq!(capture.text(), "%RED%x%RST%\r\n");
}

#[test]
fn ansi_styling_in_message() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").ansi_styling(true).build();
    logger.log(&SITE, Level::Info, "%RED%failure%RST%", &[]);
    assert_eq!(capture.text(), "\x1b[0;31mfailure\x1b[0m\r\n");
}

#[test]
fn argument_values_are_not_styled() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").ansi_styling(true).build();
    logger.log(&SITE, Level::Info, "v={}", &[&"%RED%"]);
    assert_eq!(capture.text(), "v=%RED%\r\n");
}

#[test]
fn level_filtering_skips_sink() {
    let capture = Capture::default();
    let logger = builder(&capture, "%LVL%").level(Level::Warn).build();
    logger.log(&SITE, Level::Debug, "dropped", &[]);
    logger.log(&SITE, Level::Info, "dropped", &[]);
    assert_eq!(capture.writes(), 0);

    logger.log(&SITE, Level::Warn, "kept", &[]);
    logger.log(&SITE, Level::Fatal, "kept", &[]);
    assert_eq!(capture.writes(), 2);
    assert_eq!(capture.text(), "WARNING\r\nFATAL\r\n");
}

#[test]
fn set_level_at_runtime() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").build();
    logger.set_level(Level::Error);
    assert_eq!(logger.min_level(), Level::Error);
    assert!(!logger.enabled(Level::Warn));
    assert!(logger.enabled(Level::Fatal));
    logger.log(&SITE, Level::Warn, "no", &[]);
    assert_eq!(capture.writes(), 0);
}

#[test]
fn set_template_waits_for_reparse() {
    let capture = Capture::default();
    let logger = builder(&capture, "A %MSG%").build();

    logger.set_template("B %MSG%");
    logger.log(&SITE, Level::Info, "1", &[]);
    assert_eq!(logger.template(), "A %MSG%");

    assert!(logger.reparse_format());
    logger.log(&SITE, Level::Info, "2", &[]);
    assert_eq!(logger.template(), "B %MSG%");

    // Nothing pending: reparse keeps the current template.
    assert!(logger.reparse_format());
    logger.log(&SITE, Level::Info, "3", &[]);

    assert_eq!(capture.text(), "A 1\r\nB 2\r\nB 3\r\n");
}

#[test]
fn exclusive_access_path() {
    let capture = Capture::default();
    let mut logger = builder(&capture, "%LVL% %MSG%").level(Level::Info).build();
    logger.log_mut(&SITE, Level::Debug, "filtered", &[]);
    logger.log_mut(&SITE, Level::Info, "boot {}", &[&1]);
    logger.set_template("%MSG%");
    logger.reparse_format_mut();
    logger.log_mut(&SITE, Level::Info, "ready", &[]);
    assert_eq!(capture.text(), "INFO boot 1\r\nready\r\n");
}

#[test]
fn runtime_switches() {
    let capture = Capture::default();
    let logger = builder(&capture, "%MSG%").build();
    logger.set_style_tags(false);
    logger.log(&SITE, Level::Info, "%BOLD%", &[]);
    logger.set_style_tags(true);
    logger.set_ansi_styling(true);
    logger.log(&SITE, Level::Info, "%BOLD%", &[]);
    assert_eq!(capture.text(), "%BOLD%\r\n\x1b[1m\r\n");
}

#[test]
fn macros_capture_call_site() {
    let capture = Capture::default();
    let logger = builder(&capture, "%FUNC%|%FILE%|%LVL%|%MSG%").build();

    info!(logger, "hello {}", "world");
    let text = capture.text();
    assert!(
        text.starts_with("macros_capture_call_site|tests/logger.rs|INFO|hello world"),
        "{text}"
    );
}

#[test]
fn call_site_inside_closure_names_enclosing_function() {
    let here = || picolog::call_site!();
    let site = here();
    assert_eq!(site.func, "call_site_inside_closure_names_enclosing_function");
    assert_eq!(site.file, "tests/logger.rs");
}

#[test]
fn function_name_keeps_last_segment() {
    assert_eq!(CallSite::function_name("app::net::connect"), "connect");
    assert_eq!(CallSite::function_name("app::run::{{closure}}"), "run");
    assert_eq!(CallSite::function_name("<app::Uart as app::Port>::send"), "send");
    assert_eq!(CallSite::function_name("main"), "main");
}

#[test]
fn level_macros() {
    let capture = Capture::default();
    let logger = builder(&capture, "%LVL% %MSG%").build();
    debug!(logger, "d");
    info!(logger, "i");
    warn!(logger, "w {}", 1);
    error!(logger, "e {} {}", 1, 2);
    fatal!(logger, "f");
    log!(logger, Level::Info, "l");
    assert_eq!(
        capture.text(),
        "DEBUG d\r\nINFO i\r\nWARNING w 1\r\nERROR e 1 2\r\nFATAL f\r\nINFO l\r\n"
    );
}

#[test]
fn concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let capture = Capture::default();
    let logger = Arc::new(builder(&capture, "[%LVL%] %MSG%").build());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log(&SITE, Level::Info, "thread {} line {} end", &[&t, &i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(capture.writes(), THREADS * PER_THREAD);
    let text = capture.text();
    let lines: Vec<&str> = text.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        assert!(line.starts_with("[INFO] thread "), "{line}");
        assert!(line.ends_with(" end"), "{line}");
    }
}

#[test]
fn reparse_while_logging_never_blocks() {
    let capture = Capture::default();
    let logger = Arc::new(builder(&capture, "%MSG%").build());

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                logger.log(&SITE, Level::Info, "{}", &[&i]);
            }
        })
    };
    for _ in 0..500 {
        logger.set_template("> %MSG%");
        // Fails only while the writer holds the guard.
        let _ = logger.reparse_format();
    }
    writer.join().unwrap();

    assert!(logger.reparse_format());
    assert_eq!(logger.template(), "> %MSG%");
    assert_eq!(capture.writes(), 500);
}

#[test]
fn internal_logger_init_is_idempotent() {
    picolog::internal::init();
    picolog::internal::init();
    picolog::internal::debug("internal logger reachable from tests");
}
