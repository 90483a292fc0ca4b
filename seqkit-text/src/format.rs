//! Configurable sequence-to-string formatting
//!
//! Each element is rendered, padded according to its [`ElementFormat`],
//! wrapped in the prefix and suffix, and joined with the separator:
//! `[1, 2]` with prefix `<` and suffix `>` becomes `<1>, <2>`.
//!
//! Options can also be read from a compact specification string, see
//! [`FormatSpec::parse`].

use std::fmt::{self, Display};

use seqkit_core::Sequence;

use crate::ansi::Style;
use crate::error::{FormatError, Result};

/// Horizontal alignment within the element width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right
    #[default]
    Left,
    /// Pad on both sides, extra fill on the right
    Center,
    /// Pad on the left
    Right,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '^' => Some(Self::Center),
            '>' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Per-element rendering: `[[fill]align][width][.precision]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFormat {
    /// Padding character
    pub fill: char,
    /// Alignment when padding
    pub align: Align,
    /// Minimum width in characters
    pub width: Option<usize>,
    /// Precision forwarded to the element's `Display` impl
    pub precision: Option<usize>,
}

impl Default for ElementFormat {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: None,
            precision: None,
        }
    }
}

impl ElementFormat {
    /// Parse `[[fill]align][width][.precision]`
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = || FormatError::InvalidElementFormat(spec.to_string());
        let mut format = Self::default();
        let chars: Vec<char> = spec.chars().collect();
        let mut i = 0;

        match (chars.first(), chars.get(1)) {
            (Some(&fill), Some(&c)) if Align::from_char(c).is_some() => {
                format.fill = fill;
                format.align = Align::from_char(c).ok_or_else(invalid)?;
                i = 2;
            }
            (Some(&c), _) if Align::from_char(c).is_some() => {
                format.align = Align::from_char(c).ok_or_else(invalid)?;
                i = 1;
            }
            _ => {}
        }

        let digits = |from: usize| {
            chars[from..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count()
        };

        let width_len = digits(i);
        if width_len > 0 {
            let text: String = chars[i..i + width_len].iter().collect();
            format.width = Some(text.parse().map_err(|_| invalid())?);
            i += width_len;
        }

        if chars.get(i) == Some(&'.') {
            let precision_len = digits(i + 1);
            if precision_len == 0 {
                return Err(invalid());
            }
            let text: String = chars[i + 1..i + 1 + precision_len].iter().collect();
            format.precision = Some(text.parse().map_err(|_| invalid())?);
            i += 1 + precision_len;
        }

        if i != chars.len() {
            return Err(invalid());
        }
        Ok(format)
    }

    /// Render `value` with precision and padding applied
    pub fn render<T: Display + ?Sized>(&self, value: &T) -> String {
        let body = match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        };
        self.pad(body)
    }

    /// Pad an already rendered element to the configured width
    pub fn pad(&self, body: String) -> String {
        let Some(width) = self.width else {
            return body;
        };
        let len = body.chars().count();
        if len >= width {
            return body;
        }
        let fill = width - len;
        let (left, right) = match self.align {
            Align::Left => (0, fill),
            Align::Right => (fill, 0),
            Align::Center => (fill / 2, fill - fill / 2),
        };
        let mut out = String::with_capacity(body.len() + fill * self.fill.len_utf8());
        out.extend(std::iter::repeat(self.fill).take(left));
        out.push_str(&body);
        out.extend(std::iter::repeat(self.fill).take(right));
        out
    }
}

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Written between elements
    pub separator: String,
    /// Written before each element
    pub prefix: String,
    /// Written after each element
    pub suffix: String,
    /// Per-element rendering
    pub element: ElementFormat,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            suffix: String::new(),
            element: ElementFormat::default(),
        }
    }
}

impl FormatOptions {
    /// Defaults with each element in single quotes, for characters
    pub fn quoted_chars() -> Self {
        Self {
            prefix: "'".to_string(),
            suffix: "'".to_string(),
            ..Self::default()
        }
    }

    /// Defaults with each element in double quotes, for strings
    pub fn quoted_strings() -> Self {
        Self {
            prefix: "\"".to_string(),
            suffix: "\"".to_string(),
            ..Self::default()
        }
    }

    /// Replace the separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the per-element prefix and suffix
    pub fn wrap_with(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Paint every element with `style`, inside the prefix and suffix
    pub fn styled(mut self, style: &Style) -> Self {
        self.prefix.push_str(&style.setter());
        self.suffix.insert_str(0, &style.resetter());
        self
    }
}

/// Parser for compact format specifications.
///
/// A specification is a sequence of `key'value'` entries, optionally
/// separated by whitespace:
///
/// * `e'…'` separator
/// * `p'…'` prefix
/// * `s'…'` suffix
/// * `f'…'` element format, see [`ElementFormat::parse`]
///
/// Inside a value, `\'` is a literal quote and `\\` a literal backslash.
/// Keys that are not given keep their default.
pub struct FormatSpec;

impl FormatSpec {
    /// Parse a specification into options
    pub fn parse(spec: &str) -> Result<FormatOptions> {
        let mut options = FormatOptions::default();
        let mut chars = spec.char_indices();

        while let Some((offset, key)) = chars.next() {
            if key.is_whitespace() {
                continue;
            }
            if !matches!(key, 'e' | 'p' | 's' | 'f') {
                return Err(FormatError::UnknownKey { key, offset });
            }
            if chars.next().map(|(_, c)| c) != Some('\'') {
                return Err(FormatError::ExpectedQuote { key, offset });
            }

            let mut value = String::new();
            let mut closed = false;
            while let Some((_, c)) = chars.next() {
                match c {
                    '\'' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some((_, escaped)) => value.push(escaped),
                        None => break,
                    },
                    _ => value.push(c),
                }
            }
            if !closed {
                return Err(FormatError::UnterminatedQuote { key });
            }

            match key {
                'e' => options.separator = value,
                'p' => options.prefix = value,
                's' => options.suffix = value,
                _ => options.element = ElementFormat::parse(&value)?,
            }
        }

        Ok(options)
    }
}

/// `Display` adapter that formats a slice lazily
pub struct Joined<'a, T> {
    items: &'a [T],
    options: &'a FormatOptions,
}

impl<'a, T> Joined<'a, T> {
    /// Wrap `items` for display with `options`
    pub fn new<S>(items: &'a S, options: &'a FormatOptions) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        Self {
            items: items.as_slice(),
            options,
        }
    }
}

impl<T: Display> Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        push_joined(&mut out, self.items, self.options, |item| {
            self.options.element.render(item)
        });
        f.write_str(&out)
    }
}

fn push_joined<T, F>(out: &mut String, items: &[T], options: &FormatOptions, mut render: F)
where
    F: FnMut(&T) -> String,
{
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(&options.separator);
        }
        out.push_str(&options.prefix);
        out.push_str(&render(item));
        out.push_str(&options.suffix);
    }
}

/// Format a sequence of `Display` elements
pub fn to_string<S>(seq: &S, options: &FormatOptions) -> String
where
    S: Sequence + ?Sized,
    S::Item: Display,
{
    Joined::new(seq, options).to_string()
}

/// Format a sequence with a custom element converter.
///
/// The converter's output is padded by the element format; precision does
/// not apply.
pub fn to_string_with<S, F>(seq: &S, mut converter: F, options: &FormatOptions) -> String
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> String,
{
    let mut out = String::new();
    push_joined(&mut out, seq.as_slice(), options, |item| {
        options.element.pad(converter(item))
    });
    out
}

/// Format a single character the way `to_string` formats one element
pub fn char_to_string(c: char) -> String {
    c.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let values: Vec<i32> = (1..=10).collect();
        assert_eq!(
            to_string(&values, &FormatOptions::default()),
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10"
        );
    }

    #[test]
    fn test_converter_prefix_suffix() {
        let values: Vec<i32> = (1..=10).collect();
        let options = FormatOptions::default().separator("... ").wrap_with("<", ">");
        assert_eq!(
            to_string_with(&values, |i| format!("#{i}#"), &options),
            "<#1#>... <#2#>... <#3#>... <#4#>... <#5#>... \
             <#6#>... <#7#>... <#8#>... <#9#>... <#10#>"
        );
    }

    #[test]
    fn test_converter_pads_like_display() {
        let options = FormatSpec::parse("e'|' f'>3'").unwrap();
        let values = [1, 22, 333];
        let converted = to_string_with(&values, |v| v.to_string(), &options);
        assert_eq!(converted, "  1| 22|333");
        assert_eq!(converted, to_string(&values, &options));
        assert_eq!(converted, Joined::new(&values, &options).to_string());
    }

    #[test]
    fn test_styled_elements() {
        let options = FormatOptions::default()
            .wrap_with("[", "]")
            .styled(&crate::ansi::BOLD);
        assert_eq!(
            to_string(&[1, 2], &options),
            "[\x1b[1m1\x1b[22m], [\x1b[1m2\x1b[22m]"
        );
        let plain = FormatOptions::default().styled(&Style::default());
        assert_eq!(plain, FormatOptions::default());
    }

    #[test]
    fn test_quoted_defaults() {
        assert_eq!(
            to_string(&['a', 'b', 'c', 'd', 'e'], &FormatOptions::quoted_chars()),
            "'a', 'b', 'c', 'd', 'e'"
        );
        let words = ["Well", "Hello", "There", "General", "Kenobi"];
        assert_eq!(
            to_string(&words, &FormatOptions::quoted_strings()),
            "\"Well\", \"Hello\", \"There\", \"General\", \"Kenobi\""
        );
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [u8; 0] = [];
        assert_eq!(to_string(&empty, &FormatOptions::quoted_chars()), "");
    }

    #[test]
    fn test_element_format_parse() {
        assert_eq!(ElementFormat::parse("").unwrap(), ElementFormat::default());
        let format = ElementFormat::parse("*>6.2").unwrap();
        assert_eq!(format.fill, '*');
        assert_eq!(format.align, Align::Right);
        assert_eq!(format.width, Some(6));
        assert_eq!(format.precision, Some(2));

        let format = ElementFormat::parse("^5").unwrap();
        assert_eq!(format.fill, ' ');
        assert_eq!(format.align, Align::Center);
        assert_eq!(format.width, Some(5));

        assert!(ElementFormat::parse("5.").is_err());
        assert!(ElementFormat::parse("abc").is_err());
    }

    #[test]
    fn test_element_render() {
        let format = ElementFormat::parse("0>6.2").unwrap();
        assert_eq!(format.render(&3.14159), "003.14");
        let format = ElementFormat::parse("-^7").unwrap();
        assert_eq!(format.render("abc"), "--abc--");
        let format = ElementFormat::parse("<4").unwrap();
        assert_eq!(format.render(&12), "12  ");
        assert_eq!(format.render(&123456), "123456");
    }

    #[test]
    fn test_spec_parse() {
        let options = FormatSpec::parse("e' | ' p'[' s']' f'>3'").unwrap();
        assert_eq!(options.separator, " | ");
        assert_eq!(options.prefix, "[");
        assert_eq!(options.suffix, "]");
        assert_eq!(to_string(&[1, 22, 333], &options), "[  1] | [ 22] | [333]");

        let options = FormatSpec::parse(r"p'\''s'\''").unwrap();
        assert_eq!(options, FormatOptions::quoted_chars());
    }

    #[test]
    fn test_spec_errors() {
        assert_eq!(
            FormatSpec::parse("x'a'"),
            Err(FormatError::UnknownKey { key: 'x', offset: 0 })
        );
        assert_eq!(
            FormatSpec::parse(" e,"),
            Err(FormatError::ExpectedQuote { key: 'e', offset: 1 })
        );
        assert_eq!(
            FormatSpec::parse("p'abc"),
            Err(FormatError::UnterminatedQuote { key: 'p' })
        );
        assert!(matches!(
            FormatSpec::parse("f'x'"),
            Err(FormatError::InvalidElementFormat(_))
        ));
    }

    #[test]
    fn test_joined_display() {
        let options = FormatOptions::default().separator("-");
        assert_eq!(format!("{}", Joined::new(&[1, 2, 3], &options)), "1-2-3");
        assert_eq!(char_to_string('x'), "x");
    }
}
