//! The renderer needs a clock for `%TSTMP%` and a way to ask which task and core it
//! is running on for `%TASK%` and `%CORE%`. Both are platform services, so they are
//! traits here and the logger is handed an implementation.

use std::fmt;
use std::time::Instant;

/// Monotonic millisecond source.
pub trait Clock: Send {
    /// Milliseconds since boot (or since the clock was created). Never decreases.
    fn millis_since_start(&self) -> u64;
}

/// `Instant`-based clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn millis_since_start(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// RTOS task names are short (FreeRTOS defaults to 16 bytes), so they are carried inline.
pub const TASK_NAME_CAPACITY: usize = 16;

/// A task name copied into a fixed inline buffer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TaskName {
    bytes: [u8; TASK_NAME_CAPACITY],
    len: u8,
}

impl TaskName {
    /// Copies `name`, cutting it at [`TASK_NAME_CAPACITY`] bytes on a character boundary.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(name: &str) -> Self {
        let mut len = name.len().min(TASK_NAME_CAPACITY);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        let mut bytes = [0u8; TASK_NAME_CAPACITY];
        bytes[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Debug for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers "who is logging" for the `%TASK%` and `%CORE%` placeholders.
///
/// Either answer may be unavailable (no scheduler yet, single-core part); the
/// renderer prints a fixed fallback in that case.
pub trait ExecutionContext: Send {
    fn current_task_name(&self) -> Option<TaskName>;
    fn current_core_id(&self) -> Option<u32>;
}

/// Bare-metal context: no scheduler, no core query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ExecutionContext for NoContext {
    fn current_task_name(&self) -> Option<TaskName> {
        None
    }

    fn current_core_id(&self) -> Option<u32> {
        None
    }
}

/// Hosted context: the task is the current `std` thread, when it has a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadContext;

impl ExecutionContext for ThreadContext {
    fn current_task_name(&self) -> Option<TaskName> {
        std::thread::current().name().map(TaskName::new)
    }

    /// `std` has no portable way to ask which CPU we are on.
    fn current_core_id(&self) -> Option<u32> {
        None
    }
}
