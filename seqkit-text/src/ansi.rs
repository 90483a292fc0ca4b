//! ANSI escape codes for styled terminal output
//!
//! A [`Style`] pairs the SGR (Select Graphic Rendition) parameters that
//! switch an attribute on with those that switch it back off. Combined
//! styles join their parameters with `;`, so `&BOLD + &RED` sets both in a
//! single sequence, `"\x1b[1;31m"`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use std::borrow::Cow;
use std::fmt;
use std::ops::Add;

use crate::error::{FormatError, Result};

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence
pub const SGR: &str = "m";

/// Build an SGR sequence from raw parameters such as `"1"` or `"38;5;150"`
pub fn sgr(params: &str) -> String {
    format!("{CSI}{params}{SGR}")
}

/// SGR parameters to enable an attribute and to disable it again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    set: Cow<'static, [u8]>,
    reset: Cow<'static, [u8]>,
}

/// Clears every attribute
pub const RESET: Style = Style::new(&[0], &[0]);
/// Bold or increased intensity
pub const BOLD: Style = Style::new(&[1], &[22]);
/// Faint or decreased intensity
pub const FAINT: Style = Style::new(&[2], &[22]);
/// Italic
pub const ITALIC: Style = Style::new(&[3], &[23]);
/// Underline
pub const UNDERLINE: Style = Style::new(&[4], &[24]);
/// Slow blink
pub const BLINK: Style = Style::new(&[5], &[25]);
/// Swapped foreground and background
pub const REVERSE: Style = Style::new(&[7], &[27]);
/// Crossed-out text
pub const STRIKE: Style = Style::new(&[9], &[29]);

/// Black foreground
pub const BLACK: Style = Style::new(&[30], &[39]);
/// Red foreground
pub const RED: Style = Style::new(&[31], &[39]);
/// Green foreground
pub const GREEN: Style = Style::new(&[32], &[39]);
/// Yellow foreground
pub const YELLOW: Style = Style::new(&[33], &[39]);
/// Blue foreground
pub const BLUE: Style = Style::new(&[34], &[39]);
/// Magenta foreground
pub const MAGENTA: Style = Style::new(&[35], &[39]);
/// Cyan foreground
pub const CYAN: Style = Style::new(&[36], &[39]);
/// White foreground
pub const WHITE: Style = Style::new(&[37], &[39]);
/// Gray (bright black) foreground
pub const GRAY: Style = Style::new(&[90], &[39]);
/// Bright red foreground
pub const BRIGHT_RED: Style = Style::new(&[91], &[39]);
/// Bright green foreground
pub const BRIGHT_GREEN: Style = Style::new(&[92], &[39]);
/// Bright yellow foreground
pub const BRIGHT_YELLOW: Style = Style::new(&[93], &[39]);
/// Bright blue foreground
pub const BRIGHT_BLUE: Style = Style::new(&[94], &[39]);
/// Bright magenta foreground
pub const BRIGHT_MAGENTA: Style = Style::new(&[95], &[39]);
/// Bright cyan foreground
pub const BRIGHT_CYAN: Style = Style::new(&[96], &[39]);
/// Bright white foreground
pub const BRIGHT_WHITE: Style = Style::new(&[97], &[39]);

/// Black background
pub const BLACK_BG: Style = Style::new(&[40], &[49]);
/// Red background
pub const RED_BG: Style = Style::new(&[41], &[49]);
/// Green background
pub const GREEN_BG: Style = Style::new(&[42], &[49]);
/// Yellow background
pub const YELLOW_BG: Style = Style::new(&[43], &[49]);
/// Blue background
pub const BLUE_BG: Style = Style::new(&[44], &[49]);
/// Magenta background
pub const MAGENTA_BG: Style = Style::new(&[45], &[49]);
/// Cyan background
pub const CYAN_BG: Style = Style::new(&[46], &[49]);
/// White background
pub const WHITE_BG: Style = Style::new(&[47], &[49]);
/// Gray (bright black) background
pub const GRAY_BG: Style = Style::new(&[100], &[49]);
/// Bright red background
pub const BRIGHT_RED_BG: Style = Style::new(&[101], &[49]);
/// Bright green background
pub const BRIGHT_GREEN_BG: Style = Style::new(&[102], &[49]);
/// Bright yellow background
pub const BRIGHT_YELLOW_BG: Style = Style::new(&[103], &[49]);
/// Bright blue background
pub const BRIGHT_BLUE_BG: Style = Style::new(&[104], &[49]);
/// Bright magenta background
pub const BRIGHT_MAGENTA_BG: Style = Style::new(&[105], &[49]);
/// Bright cyan background
pub const BRIGHT_CYAN_BG: Style = Style::new(&[106], &[49]);
/// Bright white background
pub const BRIGHT_WHITE_BG: Style = Style::new(&[107], &[49]);

impl Style {
    /// A style from fixed parameter lists
    pub const fn new(set: &'static [u8], reset: &'static [u8]) -> Self {
        Self {
            set: Cow::Borrowed(set),
            reset: Cow::Borrowed(reset),
        }
    }

    /// 256-color palette foreground
    pub fn color(index: u8) -> Self {
        Self::owned(vec![38, 5, index], &[39])
    }

    /// 256-color palette background
    pub fn color_bg(index: u8) -> Self {
        Self::owned(vec![48, 5, index], &[49])
    }

    /// 24-bit foreground
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::owned(vec![38, 2, r, g, b], &[39])
    }

    /// 24-bit background
    pub fn rgb_bg(r: u8, g: u8, b: u8) -> Self {
        Self::owned(vec![48, 2, r, g, b], &[49])
    }

    fn owned(set: Vec<u8>, reset: &'static [u8]) -> Self {
        Self {
            set: Cow::Owned(set),
            reset: Cow::Borrowed(reset),
        }
    }

    /// Look up a named style such as `"bold"`, `"bright-red"` or `"blue-bg"`
    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name.to_ascii_lowercase().as_str() {
            "reset" => RESET,
            "bold" => BOLD,
            "faint" => FAINT,
            "italic" => ITALIC,
            "underline" => UNDERLINE,
            "blink" => BLINK,
            "reverse" => REVERSE,
            "strike" => STRIKE,
            "black" => BLACK,
            "red" => RED,
            "green" => GREEN,
            "yellow" => YELLOW,
            "blue" => BLUE,
            "magenta" => MAGENTA,
            "cyan" => CYAN,
            "white" => WHITE,
            "gray" => GRAY,
            "bright-red" => BRIGHT_RED,
            "bright-green" => BRIGHT_GREEN,
            "bright-yellow" => BRIGHT_YELLOW,
            "bright-blue" => BRIGHT_BLUE,
            "bright-magenta" => BRIGHT_MAGENTA,
            "bright-cyan" => BRIGHT_CYAN,
            "bright-white" => BRIGHT_WHITE,
            "black-bg" => BLACK_BG,
            "red-bg" => RED_BG,
            "green-bg" => GREEN_BG,
            "yellow-bg" => YELLOW_BG,
            "blue-bg" => BLUE_BG,
            "magenta-bg" => MAGENTA_BG,
            "cyan-bg" => CYAN_BG,
            "white-bg" => WHITE_BG,
            "gray-bg" => GRAY_BG,
            "bright-red-bg" => BRIGHT_RED_BG,
            "bright-green-bg" => BRIGHT_GREEN_BG,
            "bright-yellow-bg" => BRIGHT_YELLOW_BG,
            "bright-blue-bg" => BRIGHT_BLUE_BG,
            "bright-magenta-bg" => BRIGHT_MAGENTA_BG,
            "bright-cyan-bg" => BRIGHT_CYAN_BG,
            "bright-white-bg" => BRIGHT_WHITE_BG,
            _ => return None,
        };
        Some(style)
    }

    /// Parse a comma-separated list of style names into one combined style
    pub fn parse(names: &str) -> Result<Self> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::default(), |style, name| {
                Self::from_name(name)
                    .map(|next| style.combine(&next))
                    .ok_or_else(|| FormatError::UnknownStyle(name.to_string()))
            })
    }

    /// Whether the style emits no escape codes at all
    pub fn is_plain(&self) -> bool {
        self.set.is_empty() && self.reset.is_empty()
    }

    /// Sequence that enables the style, empty for a plain style
    pub fn setter(&self) -> String {
        render(&self.set)
    }

    /// Sequence that disables the style, empty for a plain style
    pub fn resetter(&self) -> String {
        render(&self.reset)
    }

    /// `text` between the setter and the resetter
    pub fn paint(&self, text: &str) -> String {
        [self.setter().as_str(), text, self.resetter().as_str()].concat()
    }

    /// Both styles at once
    pub fn combine(&self, other: &Style) -> Style {
        Self {
            set: Cow::Owned([&self.set[..], &other.set[..]].concat()),
            reset: Cow::Owned([&self.reset[..], &other.reset[..]].concat()),
        }
    }
}

fn render(params: &[u8]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = params.iter().map(u8::to_string).collect();
    sgr(&joined.join(";"))
}

impl fmt::Display for Style {
    /// Writes the setter, so a style can be dropped into `format!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.setter())
    }
}

impl Add<&Style> for &Style {
    type Output = Style;

    fn add(self, rhs: &Style) -> Style {
        self.combine(rhs)
    }
}

impl Add for Style {
    type Output = Style;

    fn add(self, rhs: Style) -> Style {
        self.combine(&rhs)
    }
}

/// Move the cursor up `n` rows
pub fn cursor_up(n: u16) -> String {
    format!("{CSI}{n}A")
}

/// Move the cursor down `n` rows
pub fn cursor_down(n: u16) -> String {
    format!("{CSI}{n}B")
}

/// Move the cursor right `n` columns
pub fn cursor_forward(n: u16) -> String {
    format!("{CSI}{n}C")
}

/// Move the cursor left `n` columns
pub fn cursor_back(n: u16) -> String {
    format!("{CSI}{n}D")
}

/// Move the cursor to a 1-based column of the current row
pub fn cursor_column(column: u16) -> String {
    format!("{CSI}{column}G")
}

/// Move the cursor to a 1-based column and row
pub fn cursor_to(column: u16, row: u16) -> String {
    format!("{CSI}{row};{column}H")
}

/// Clear the screen and scrollback, then home the cursor
pub fn clear_screen() -> String {
    format!("{CSI}2J{CSI}3J{}", cursor_to(1, 1))
}

/// Clear the current line and move to its first column
pub fn clear_line() -> String {
    format!("{CSI}2K{}", cursor_column(1))
}

/// Show the cursor
pub fn show_cursor() -> String {
    format!("{CSI}?25h")
}

/// Hide the cursor
pub fn hide_cursor() -> String {
    format!("{CSI}?25l")
}
