//! Direct Logger construction would require knowing every collaborator's internals;
//! the builder hides that behind a stepwise API.

use super::{Engine, Logger};
use crate::context::{Clock, ExecutionContext, MonotonicClock, ThreadContext};
use crate::fmt::{DEFAULT_TEMPLATE, FormatTemplate};
use crate::level::Level;
use crate::output::{Sink, TerminalSink};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, AtomicU8};

/// Collects settings and collaborators, then parses the template once in `build`.
pub struct LoggerBuilder {
    min_level: Level,
    template: Cow<'static, str>,
    ansi_styling: bool,
    style_tags: bool,
    sink: Option<Box<dyn Sink>>,
    clock: Option<Box<dyn Clock>>,
    context: Option<Box<dyn ExecutionContext>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Everything on: debug level, default template, ANSI and style tags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Debug,
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
            ansi_styling: true,
            style_tags: true,
            sink: None,
            clock: None,
            context: None,
        }
    }

    /// Calls below this severity return before touching the guard.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = template.into();
        self
    }

    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn ansi_styling(mut self, enabled: bool) -> Self {
        self.ansi_styling = enabled;
        self
    }

    /// When off, `%RED%` and friends in a message are left as typed.
    #[must_use]
    pub const fn style_tags(mut self, enabled: bool) -> Self {
        self.style_tags = enabled;
        self
    }

    /// Defaults to stdout.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Defaults to a [`MonotonicClock`] started at `build`.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Defaults to [`ThreadContext`].
    #[must_use]
    pub fn context(mut self, context: impl ExecutionContext + 'static) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    /// Builds a logger with the default 256-byte line buffers.
    #[must_use]
    pub fn build(self) -> Logger {
        self.build_sized()
    }

    /// Builds a logger whose line buffers are `N` bytes each.
    #[must_use]
    pub fn build_sized<const N: usize>(self) -> Logger<N> {
        let engine = Engine {
            template: FormatTemplate::parse(self.template),
            pending_template: None,
            output: [0; N],
            scratch: [0; N],
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(TerminalSink::stdout())),
            clock: self
                .clock
                .unwrap_or_else(|| Box::new(MonotonicClock::new())),
            context: self
                .context
                .unwrap_or_else(|| Box::new(ThreadContext)),
        };

        Logger {
            min_level: AtomicU8::new(self.min_level as u8),
            ansi_styling: AtomicBool::new(self.ansi_styling),
            style_tags: AtomicBool::new(self.style_tags),
            engine: Mutex::new(engine),
        }
    }
}
