//! Serial terminals on the other end of a UART rarely speak 24-bit color, so
//! everything here sticks to the eight classic SGR colors and a handful of styles.

use std::fmt;

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// The eight base colors, in SGR order; the discriminant is added to 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BaseColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    #[default]
    White = 7,
}

impl BaseColor {
    /// Three-letter tag names as they appear between `%` delimiters.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Black => "BLK",
            Self::Red => "RED",
            Self::Green => "GRN",
            Self::Yellow => "YLW",
            Self::Blue => "BLU",
            Self::Magenta => "MGT",
            Self::Cyan => "CYN",
            Self::White => "WHT",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];
}

/// A base color plus the two modifiers a tag can carry (`_BG`, `_HI`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSpec {
    pub color: BaseColor,
    pub background: bool,
    pub high_intensity: bool,
}

impl ColorSpec {
    #[must_use]
    pub const fn new(color: BaseColor) -> Self {
        Self {
            color,
            background: false,
            high_intensity: false,
        }
    }

    #[must_use]
    pub const fn background(mut self) -> Self {
        self.background = true;
        self
    }

    #[must_use]
    pub const fn high_intensity(mut self) -> Self {
        self.high_intensity = true;
        self
    }

    /// SGR parameter: `30 + color`, `+10` for background, `+60` for the bright variants.
    #[must_use]
    pub const fn code(self) -> u8 {
        let mut code = 30 + self.color as u8;
        if self.background {
            code += 10;
        }
        if self.high_intensity {
            code += 60;
        }
        code
    }

    /// The full `\x1b[0;{code}m` sequence, built on the stack.
    #[must_use]
    pub fn escape(self) -> Escape {
        Escape::sgr(self.code())
    }
}

/// Inline styles selected by `%BOLD%`, `%UDRLN%`, `%STKTHR%`, `%ITL%` and `%RST%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Underline,
    Strikethrough,
    Italic,
    Reset,
}

impl Style {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bold => BOLD,
            Self::Underline => UNDERLINE,
            Self::Strikethrough => STRIKETHROUGH,
            Self::Italic => ITALIC,
            Self::Reset => RESET,
        }
    }

    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Bold => "BOLD",
            Self::Underline => "UDRLN",
            Self::Strikethrough => "STKTHR",
            Self::Italic => "ITL",
            Self::Reset => "RST",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Bold,
        Self::Underline,
        Self::Strikethrough,
        Self::Italic,
        Self::Reset,
    ];
}

/// Longest sequence we build is `\x1b[0;107m`.
const ESCAPE_CAPACITY: usize = 8;

/// A color escape sequence formatted without touching the heap.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    bytes: [u8; ESCAPE_CAPACITY],
    len: u8,
}

impl Escape {
    /// `\x1b[0;{code}m`. The leading `0;` resets attributes before applying the color.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sgr(code: u8) -> Self {
        let mut bytes = [0u8; ESCAPE_CAPACITY];
        bytes[..4].copy_from_slice(b"\x1b[0;");
        let mut len = 4;

        let mut digits = [0u8; 3];
        let mut n = code;
        let mut count = 0;
        loop {
            digits[count] = b'0' + n % 10;
            count += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for digit in digits[..count].iter().rev() {
            bytes[len] = *digit;
            len += 1;
        }
        bytes[len] = b'm';
        len += 1;

        Self {
            bytes,
            len: len as u8,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written into `bytes`.
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Debug for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Escape({:?})", self.as_str())
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
