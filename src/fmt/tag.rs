//! The `%NAME%` vocabulary shared by templates and message bodies. Both parsers
//! call into this table, so a tag recognised in one place is recognised in the other.

use super::color::{BaseColor, ColorSpec, Style};

/// Closed set of substitution tokens. Only meaningful in the line template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Timestamp,
    Task,
    Level,
    Line,
    File,
    Func,
    Message,
    Core,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "TSTMP",
            Self::Task => "TASK",
            Self::Level => "LVL",
            Self::Line => "LINE",
            Self::File => "FILE",
            Self::Func => "FUNC",
            Self::Message => "MSG",
            Self::Core => "CORE",
        }
    }

    /// Iteration over all variants avoids forgetting a placeholder when matching by name.
    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Task,
        Self::Level,
        Self::Line,
        Self::File,
        Self::Func,
        Self::Message,
        Self::Core,
    ];
}

/// One recognised tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Placeholder(Placeholder),
    Style(Style),
    Color(ColorSpec),
}

/// Parses the tag that starts right after an opening `%`.
///
/// Returns the tag and the number of bytes it occupies, closing `%` included.
/// `None` means the bytes do not form a known tag.
#[must_use]
pub fn parse(s: &[u8]) -> Option<(Tag, usize)> {
    for ph in Placeholder::ALL {
        if let Some(len) = match_name(s, ph.as_str()) {
            return Some((Tag::Placeholder(*ph), len));
        }
    }

    for style in Style::ALL {
        if let Some(len) = match_name(s, style.tag_name()) {
            return Some((Tag::Style(*style), len));
        }
    }

    for color in BaseColor::ALL {
        if s.starts_with(color.tag_name().as_bytes()) {
            return parse_color(*color, s).map(|(spec, len)| (Tag::Color(spec), len));
        }
    }

    None
}

/// Exact `NAME%` match.
fn match_name(s: &[u8], name: &str) -> Option<usize> {
    let name = name.as_bytes();
    (s.starts_with(name) && s.get(name.len()) == Some(&b'%')).then_some(name.len() + 1)
}

/// After the three-letter color name: up to two distinct modifiers (`_HI`, `_BG`, any order), then `%`.
fn parse_color(color: BaseColor, s: &[u8]) -> Option<(ColorSpec, usize)> {
    let mut spec = ColorSpec::new(color);
    let mut pos = color.tag_name().len();

    for _ in 0..2 {
        match s.get(pos..pos + 3) {
            Some(b"_HI") if !spec.high_intensity => spec.high_intensity = true,
            Some(b"_BG") if !spec.background => spec.background = true,
            _ => break,
        }
        pos += 3;
    }

    (s.get(pos) == Some(&b'%')).then_some((spec, pos + 1))
}

/// Characters that can appear in a tag name.
#[must_use]
pub const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == b'_'
}

/// Length of an unrecognised tag that starts right after `%`: the run of name
/// characters plus the closing `%` if it directly follows.
#[must_use]
pub fn unknown_len(s: &[u8]) -> usize {
    let name = s.iter().take_while(|b| is_name_byte(**b)).count();
    if name > 0 && s.get(name) == Some(&b'%') {
        name + 1
    } else {
        name
    }
}
