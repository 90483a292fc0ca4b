//! Greedy word wrapping

use tracing::debug;

use crate::trim::DEFAULT_DELIMITERS;

/// Word-wrap configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Target line width in characters
    pub width: usize,
    /// Cut words longer than `width` instead of overflowing
    pub force: bool,
    /// Characters a line may break at
    pub delimiters: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 80,
            force: false,
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}

impl WrapOptions {
    /// Default options with the given width
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Wrap `text` into lines of at most `width` characters where possible.
///
/// While the remaining text is longer than `width + 1` characters, the line
/// ends at the last delimiter within the first `width + 1` characters and
/// that delimiter is dropped. A word with no such delimiter is either cut
/// at exactly `width` characters (`force`) or kept whole up to the next
/// delimiter.
pub fn word_wrap(text: &str, options: &WrapOptions) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let is_delimiter = |c: &char| options.delimiters.contains(*c);
    let limit = options.width + 1;

    let mut lines = Vec::new();
    let mut rest = &chars[..];
    while rest.len() > limit {
        let head = &rest[..limit];
        let split = match head.iter().rposition(is_delimiter) {
            Some(pos) => pos,
            None if options.force && options.width > 0 => {
                lines.push(rest[..options.width].iter().collect());
                rest = &rest[options.width..];
                continue;
            }
            None => match rest.iter().position(is_delimiter) {
                Some(pos) => pos,
                None => break,
            },
        };
        lines.push(rest[..split].iter().collect());
        rest = &rest[split + 1..];
    }
    if !rest.is_empty() {
        lines.push(rest.iter().collect());
    }

    debug!(
        width = options.width,
        force = options.force,
        lines = lines.len(),
        "wrapped text"
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(word_wrap("short", &WrapOptions::with_width(10)), vec!["short"]);
        assert!(word_wrap("", &WrapOptions::default()).is_empty());
    }

    #[test]
    fn test_breaks_at_last_delimiter() {
        let lines = word_wrap("aaa bbb ccc", &WrapOptions::with_width(7));
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_delimiter_exactly_past_width() {
        // The character at index `width` may be the break point.
        let lines = word_wrap("abcd efgh", &WrapOptions::with_width(4));
        assert_eq!(lines, vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_long_word_overflows_without_force() {
        let lines = word_wrap("abcdefghij kl", &WrapOptions::with_width(4));
        assert_eq!(lines, vec!["abcdefghij", "kl"]);
    }

    #[test]
    fn test_long_word_without_delimiter_is_kept() {
        let lines = word_wrap("abcdefghij", &WrapOptions::with_width(4));
        assert_eq!(lines, vec!["abcdefghij"]);
    }

    #[test]
    fn test_force_cuts_long_word() {
        let options = WrapOptions {
            force: true,
            ..WrapOptions::with_width(4)
        };
        assert_eq!(word_wrap("abcdefghij", &options), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_custom_delimiters() {
        let options = WrapOptions {
            delimiters: ",".to_string(),
            ..WrapOptions::with_width(3)
        };
        assert_eq!(word_wrap("ab,cd,ef", &options), vec!["ab", "cd", "ef"]);
    }
}
