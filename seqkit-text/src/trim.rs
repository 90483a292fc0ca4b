//! Trimming and ASCII case utilities

/// Characters trimmed (and used as word-wrap break points) by default:
/// blank, tab, carriage return, newline, form feed, vertical tab, backspace.
pub const DEFAULT_DELIMITERS: &str = " \t\r\n\x0C\x0B\x08";

/// Strip leading characters that occur in `delimiters`
pub fn trim_left<'a>(text: &'a str, delimiters: &str) -> &'a str {
    text.trim_start_matches(|c: char| delimiters.contains(c))
}

/// Strip trailing characters that occur in `delimiters`
pub fn trim_right<'a>(text: &'a str, delimiters: &str) -> &'a str {
    text.trim_end_matches(|c: char| delimiters.contains(c))
}

/// Strip both ends.
///
/// Text made only of delimiters trims to the empty string.
pub fn trim<'a>(text: &'a str, delimiters: &str) -> &'a str {
    trim_right(trim_left(text, delimiters), delimiters)
}

/// ASCII upper case; other characters are unchanged
pub fn to_upper(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// ASCII lower case; other characters are unchanged
pub fn to_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// ASCII case-insensitive string comparison
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive character comparison
pub fn eq_ignore_case_char(a: char, b: char) -> bool {
    a.eq_ignore_ascii_case(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDED: &str = " \tAyo word \t";

    #[test]
    fn test_trim() {
        assert_eq!(trim_left(PADDED, DEFAULT_DELIMITERS), "Ayo word \t");
        assert_eq!(trim_right(PADDED, DEFAULT_DELIMITERS), " \tAyo word");
        assert_eq!(trim(PADDED, DEFAULT_DELIMITERS), "Ayo word");
    }

    #[test]
    fn test_trim_only_delimiters() {
        assert_eq!(trim(" \t\r\n", DEFAULT_DELIMITERS), "");
        assert_eq!(trim_left("", DEFAULT_DELIMITERS), "");
    }

    #[test]
    fn test_trim_custom_delimiters() {
        assert_eq!(trim("--x--", "-"), "x");
        assert_eq!(trim(" x ", ""), " x ");
    }

    #[test]
    fn test_case() {
        assert_eq!(to_upper("LaTeX"), "LATEX");
        assert_eq!(to_lower("LaTeX"), "latex");
        assert_eq!(to_upper("ß"), "ß");
        assert!(eq_ignore_case("LaTeX", "lAtEx"));
        assert!(!eq_ignore_case("HeLlO", "wOrLd"));
        assert!(eq_ignore_case_char('a', 'A'));
        assert!(!eq_ignore_case_char('b', 'C'));
    }
}
