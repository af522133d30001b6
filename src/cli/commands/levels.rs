use crate::fmt::{ColorSpec, color::RESET};
use crate::level::Level;
use std::process::ExitCode;

/// Prints every level as `name  LABEL`, the label colored when `ansi` is set.
#[must_use]
pub fn cmd_levels(ansi: bool) -> ExitCode {
    for level in Level::all() {
        let label = level.label();
        if ansi {
            let escape = ColorSpec::new(level.color()).escape();
            println!("{:<6} {escape}{label}{RESET}", level.as_str());
        } else {
            println!("{:<6} {label}", level.as_str());
        }
    }
    ExitCode::SUCCESS
}
