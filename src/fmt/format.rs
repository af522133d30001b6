//! The line template (`"[%TSTMP%] [%LVL%] %MSG%"`) is parsed once into a small
//! fixed array of tokens and then expanded on every log call. Parsing is the
//! expensive part, so it only happens when the template changes.

use super::color::{ColorSpec, RESET, Style};
use super::cursor::Cursor;
use super::tag::{self, Placeholder, Tag};
use crate::context::{Clock, ExecutionContext};
use crate::level::Level;
use std::borrow::Cow;
use std::fmt::Write;

/// Token capacity of a parsed template. Anything past this many tokens is ignored.
pub const MAX_TOKENS: usize = 16;

/// Rendered by `%TASK%` when the execution context cannot name the current task.
pub const NO_TASK: &str = "NO TASK";
/// Rendered by `%CORE%` when the execution context cannot identify the core.
pub const NO_CORE: &str = "NO CORE";

const LINE_END: &str = "\r\n";

/// One parsed unit of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Token {
    /// A run of literal text, as a span into the template source.
    Text { start: usize, len: usize },
    Style(Style),
    Color(ColorSpec),
    Func,
    File,
    Line,
    Task,
    Core,
    Level,
    Timestamp,
    Message,
    /// Logical end of the sequence.
    #[default]
    End,
}

impl From<Placeholder> for Token {
    fn from(ph: Placeholder) -> Self {
        match ph {
            Placeholder::Timestamp => Self::Timestamp,
            Placeholder::Task => Self::Task,
            Placeholder::Level => Self::Level,
            Placeholder::Line => Self::Line,
            Placeholder::File => Self::File,
            Placeholder::Func => Self::Func,
            Placeholder::Message => Self::Message,
            Placeholder::Core => Self::Core,
        }
    }
}

/// Fixed-capacity token array terminated by [`Token::End`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: [Token; MAX_TOKENS],
}

impl TokenSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokens: [Token::End; MAX_TOKENS],
        }
    }

    /// Resets every slot to `End`.
    pub fn clear(&mut self) {
        self.tokens = [Token::End; MAX_TOKENS];
    }

    /// Tokens up to (not including) the first `End`.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().take_while(|t| **t != Token::End)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens[0] == Token::End
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Default for TokenSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills `tokens` from `template`, stopping silently at capacity.
fn tokenize(template: &str, tokens: &mut TokenSequence) {
    tokens.clear();

    let bytes = template.as_bytes();
    let slots = &mut tokens.tokens;
    let mut count = 0;
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() && count < MAX_TOKENS {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        if i > text_start {
            slots[count] = Token::Text {
                start: text_start,
                len: i - text_start,
            };
            count += 1;
            if count == MAX_TOKENS {
                return;
            }
        }

        let rest = &bytes[i + 1..];
        let consumed = match tag::parse(rest) {
            Some((tag, len)) => {
                slots[count] = match tag {
                    Tag::Placeholder(ph) => ph.into(),
                    Tag::Style(style) => Token::Style(style),
                    Tag::Color(spec) => Token::Color(spec),
                };
                count += 1;
                len
            }
            None => tag::unknown_len(rest),
        };

        i += 1 + consumed;
        text_start = i;
    }

    if count < MAX_TOKENS && bytes.len() > text_start {
        slots[count] = Token::Text {
            start: text_start,
            len: bytes.len() - text_start,
        };
    }
}

/// Everything a log call contributes to the rendered line.
#[derive(Debug, Clone, Copy)]
pub struct FormatValues<'a> {
    pub level: Level,
    pub func: &'a str,
    pub file: &'a str,
    pub line: u32,
    /// The message body after style tags and arguments have been applied.
    pub message: &'a str,
    /// Emit SGR sequences for style, color and level tokens.
    pub ansi: bool,
}

/// A template source together with its parsed tokens.
///
/// Text tokens are spans into `source`, so the two are only ever replaced together.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    source: Cow<'static, str>,
    tokens: TokenSequence,
}

impl FormatTemplate {
    /// Parses `template` into tokens.
    #[must_use]
    pub fn parse(template: impl Into<Cow<'static, str>>) -> Self {
        let mut this = Self {
            source: template.into(),
            tokens: TokenSequence::new(),
        };
        this.reparse();
        this
    }

    /// Rebuilds the token sequence from scratch.
    pub fn reparse(&mut self) {
        tokenize(&self.source, &mut self.tokens);
    }

    /// Swaps in a new source and re-tokenizes it.
    pub fn replace(&mut self, template: impl Into<Cow<'static, str>>) {
        self.source = template.into();
        self.reparse();
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Text of a `Text` token; empty for every other kind.
    #[must_use]
    pub fn text(&self, token: &Token) -> &str {
        match *token {
            Token::Text { start, len } => self.source.get(start..start + len).unwrap_or_default(),
            _ => "",
        }
    }

    /// Expands the tokens into `out`, terminates the line with `\r\n` and a NUL.
    ///
    /// Returns the line length including `\r\n`, excluding the NUL. Nothing is
    /// written at or past `out.len()`; when the line does not fit, the line end
    /// takes over the last two bytes before the terminator.
    pub fn render(
        &self,
        out: &mut [u8],
        values: &FormatValues<'_>,
        clock: &dyn Clock,
        context: &dyn ExecutionContext,
    ) -> usize {
        let mut cur = Cursor::new(out);

        for token in self.tokens.iter() {
            if cur.is_full() {
                break;
            }
            match *token {
                Token::Text { .. } => {
                    cur.push_str(self.text(token));
                }
                Token::Style(style) => {
                    if values.ansi {
                        cur.push_whole(style.code());
                    }
                }
                Token::Color(spec) => {
                    if values.ansi {
                        cur.push_whole(spec.escape().as_str());
                    }
                }
                Token::Func => {
                    cur.push_str(values.func);
                }
                Token::File => {
                    cur.push_str(values.file);
                }
                Token::Line => {
                    let _ = write!(cur, "{}", values.line);
                }
                Token::Task => match context.current_task_name() {
                    Some(name) => {
                        cur.push_str(name.as_str());
                    }
                    None => {
                        cur.push_str(NO_TASK);
                    }
                },
                Token::Core => match context.current_core_id() {
                    Some(id) => {
                        let _ = write!(cur, "{id}");
                    }
                    None => {
                        cur.push_str(NO_CORE);
                    }
                },
                Token::Level => write_level(&mut cur, values.level, values.ansi),
                Token::Timestamp => {
                    let ms = clock.millis_since_start();
                    let _ = write!(cur, "{}.{:03}", ms / 1000, ms % 1000);
                }
                Token::Message => {
                    cur.push_str(values.message);
                }
                Token::End => break,
            }
        }

        terminate_line(&mut cur);
        cur.terminate()
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

/// Timestamp, level and source location in front of the message.
pub const DEFAULT_TEMPLATE: &str = "[%TSTMP%] [%LVL%] [%FILE%:%LINE%]: %MSG%";

fn write_level(cur: &mut Cursor<'_>, level: Level, ansi: bool) {
    let escape = ColorSpec::new(level.color()).escape();
    let label = level.label();

    // Color only when the reset fits too; a dangling color would bleed into the next line.
    if ansi && cur.remaining() >= escape.as_str().len() + RESET.len() {
        cur.push_str(escape.as_str());
        let room = cur.remaining() - RESET.len();
        cur.push_str(&label[..label.len().min(room)]);
        cur.push_str(RESET);
    } else {
        cur.push_str(label);
    }
}

/// `\r\n` after the content, or over the last two bytes when there is no room.
fn terminate_line(cur: &mut Cursor<'_>) {
    if cur.push_whole(LINE_END) {
        return;
    }
    if cur.limit() < LINE_END.len() {
        return;
    }
    cur.rewind_to(cur.limit() - LINE_END.len());
    cur.push_whole(LINE_END);
}
