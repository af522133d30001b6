// Forbid unsafe code except when the C ABI is compiled in
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `picolog` - Allocation-free log line formatting for small targets.
//!
//! Every call renders into two fixed buffers owned by the logger:
//! - Inline style tags in the message (`%RED%`, `%BOLD%`, `%RST%`, ...)
//! - `{}` / `{N}` argument substitution
//! - A parsed line template (`"[%TSTMP%] [%LVL%] %MSG%"`) expanded per call
//! - One complete line handed to a byte sink, never interleaved with another
//!
//! # Example
//!
//! ```
//! use picolog::{Level, Logger, NoContext, TerminalSink, info, warn};
//!
//! let logger = Logger::builder()
//!     .level(Level::Info)
//!     .template("[%TSTMP%] [%TASK%] [%LVL%] %MSG%")
//!     .context(NoContext)
//!     .sink(TerminalSink::stdout())
//!     .build();
//!
//! info!(logger, "Application started");
//! warn!(logger, "%YLW%battery at {} percent%RST%", 14);
//!
//! // Swap the template at runtime: queue it, then reparse.
//! logger.set_template("%LVL%: %MSG%");
//! assert!(logger.reparse_format());
//! info!(logger, "heartbeat {}", 1);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `picolog` command-line tool
//! - `ffi`: Enables C-ABI bindings

// Core modules (always available)
pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use config::Config;
pub use context::{Clock, ExecutionContext, MonotonicClock, NoContext, TaskName, ThreadContext};
pub use error::Error;
pub use fmt::{FormatTemplate, FormatValues, Token, TokenSequence};
pub use level::{Level, ParseLevelError};
pub use logger::{CallSite, DEFAULT_BUFFER_SIZE, Logger, LoggerBuilder};
pub use output::{FileSink, Sink, Stream, TerminalSink};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    CallbackSink, PICOLOG_LEVEL_DEBUG, PICOLOG_LEVEL_ERROR, PICOLOG_LEVEL_FATAL,
    PICOLOG_LEVEL_INFO, PICOLOG_LEVEL_WARN, PicologHandle, PicologWriteFn, picolog_destroy,
    picolog_flush, picolog_init, picolog_log, picolog_reparse_format, picolog_set_level,
    picolog_set_template,
};
