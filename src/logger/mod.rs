//! The logger owns the two line buffers and the parsed template, serializes access
//! to them with a single guard, and drives each call through the pipeline:
//! style pass → argument substitution → template render → sink.

mod builder;
mod from_config;
mod site;

pub use builder::LoggerBuilder;
pub use site::CallSite;

use crate::context::{Clock, ExecutionContext};
use crate::fmt::{FormatTemplate, FormatValues, format_into, style};
use crate::level::Level;
use crate::output::Sink;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Size of each of the two line buffers when none is chosen.
///
/// This bounds the rendered line, styling and line ending included, not just the message.
pub const DEFAULT_BUFFER_SIZE: usize = 256;

/// Everything the guard protects.
struct Engine<const N: usize> {
    template: FormatTemplate,
    /// Set by `set_template`, adopted on the next reparse.
    pending_template: Option<Cow<'static, str>>,
    /// Style pass output, then the final rendered line.
    output: [u8; N],
    /// Message body after argument substitution.
    scratch: [u8; N],
    sink: Box<dyn Sink>,
    clock: Box<dyn Clock>,
    context: Box<dyn ExecutionContext>,
}

impl<const N: usize> Engine<N> {
    fn reparse(&mut self) {
        match self.pending_template.take() {
            Some(template) => self.template.replace(template),
            None => self.template.reparse(),
        }
    }

    fn log(
        &mut self,
        site: &CallSite<'_>,
        level: Level,
        message: &str,
        args: &[&dyn Display],
        flags: Flags,
    ) {
        let Self {
            template,
            output,
            scratch,
            sink,
            clock,
            context,
            ..
        } = self;

        // Style tags are resolved before arguments so substituted values are never re-scanned.
        let body = if flags.style_tags {
            let len = style::process(message, output, flags.ansi);
            std::str::from_utf8(&output[..len]).unwrap_or_default()
        } else {
            message
        };

        let len = format_into(body, args, scratch);
        let message = std::str::from_utf8(&scratch[..len]).unwrap_or_default();

        let values = FormatValues {
            level,
            func: site.func,
            file: site.file,
            line: site.line,
            message,
            ansi: flags.ansi,
        };
        let len = template.render(output, &values, &**clock, &**context);

        // Sinks are fire-and-forget.
        let _ = sink.write(&output[..len]);
    }
}

/// Styling switches, snapshotted once per call.
#[derive(Debug, Clone, Copy)]
struct Flags {
    ansi: bool,
    style_tags: bool,
}

/// Fixed-buffer logger.
///
/// `N` is the size of each of the two line buffers. Level and styling switches
/// live outside the guard so filtering costs one atomic load and a compare.
/// Methods taking `&self` go through the guard; methods taking `&mut self` are
/// the early-boot path and skip it, since an exclusive borrow already rules
/// out concurrent callers.
pub struct Logger<const N: usize = DEFAULT_BUFFER_SIZE> {
    min_level: AtomicU8,
    ansi_styling: AtomicBool,
    style_tags: AtomicBool,
    engine: Mutex<Engine<N>>,
}

impl Logger {
    /// Direct construction would expose sink and clock internals; the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl<const N: usize> Logger<N> {
    fn flags(&self) -> Flags {
        Flags {
            ansi: self.ansi_styling.load(Ordering::Relaxed),
            style_tags: self.style_tags.load(Ordering::Relaxed),
        }
    }

    /// Level check shared by every entry point.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 >= self.min_level.load(Ordering::Relaxed)
    }

    /// Core dispatch: filters by severity, then renders and emits one line under the guard.
    ///
    /// Blocks until the guard is free.
    pub fn log(&self, site: &CallSite<'_>, level: Level, message: &str, args: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        let flags = self.flags();
        self.engine.lock().log(site, level, message, args, flags);
    }

    /// Same pipeline through an exclusive borrow, without taking the guard.
    pub fn log_mut(
        &mut self,
        site: &CallSite<'_>,
        level: Level,
        message: &str,
        args: &[&dyn Display],
    ) {
        if !self.enabled(level) {
            return;
        }
        let flags = self.flags();
        self.engine.get_mut().log(site, level, message, args, flags);
    }

    /// Re-tokenizes the template, adopting one queued by [`Logger::set_template`].
    ///
    /// Does not wait: returns `false` when another thread holds the guard.
    #[must_use]
    pub fn reparse_format(&self) -> bool {
        let Some(mut engine) = self.engine.try_lock() else {
            return false;
        };
        engine.reparse();
        true
    }

    /// [`Logger::reparse_format`] through an exclusive borrow; always succeeds.
    pub fn reparse_format_mut(&mut self) {
        self.engine.get_mut().reparse();
    }

    /// Queues a new line template. It takes effect on the next reparse.
    pub fn set_template(&self, template: impl Into<Cow<'static, str>>) {
        self.engine.lock().pending_template = Some(template.into());
    }

    /// The template currently used for rendering.
    #[must_use]
    pub fn template(&self) -> String {
        self.engine.lock().template.source().to_string()
    }

    pub fn set_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_ansi_styling(&self, enabled: bool) {
        self.ansi_styling.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn ansi_styling(&self) -> bool {
        self.ansi_styling.load(Ordering::Relaxed)
    }

    pub fn set_style_tags(&self, enabled: bool) {
        self.style_tags.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn style_tags(&self) -> bool {
        self.style_tags.load(Ordering::Relaxed)
    }

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O error reported by the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.engine.lock().sink.flush()
    }

    /// Capacity of each line buffer.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        N
    }
}

/// Logs through a [`Logger`] at the given level, capturing the call site.
///
/// ```
/// use picolog::{Level, Logger, log};
///
/// let logger = Logger::builder().build();
/// log!(logger, Level::Info, "booted in {} ms", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            &$crate::call_site!(),
            $level,
            $msg,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $msg $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $msg $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warn, $msg $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $msg $(, $arg)*)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Fatal, $msg $(, $arg)*)
    };
}
