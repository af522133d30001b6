//! Each subcommand lives in its own file, which keeps the match arm in main thin
//! and lets each handler own its argument validation and error reporting.

mod levels;
mod log;
mod tokens;

pub use levels::cmd_levels;
pub use log::{LogOptions, cmd_log};
pub use tokens::{cmd_tokens, describe_token};
