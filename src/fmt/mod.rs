//! Log line rendering split by stage: tag vocabulary, the style pass over the
//! message body, argument substitution, and the template tokenizer/renderer.
//! All of them write through the same bounded [`Cursor`].

mod args;
pub mod color;
mod cursor;
mod format;
pub mod style;
pub mod tag;

pub use args::{format_into, write_args};
pub use color::{BaseColor, ColorSpec, Escape, Style};
pub use cursor::Cursor;
pub use format::{
    DEFAULT_TEMPLATE, FormatTemplate, FormatValues, MAX_TOKENS, NO_CORE, NO_TASK, Token,
    TokenSequence,
};
pub use style::strip_tags;
pub use tag::{Placeholder, Tag};
