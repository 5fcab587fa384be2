//! Newline sequences of the kdlx document language.
//!
//! Line numbering in [`SourceFile`](crate::span::SourceFile) and newline
//! skipping in the scanner share this table, so a diagnostic's line number
//! always agrees with where the scanner saw a line break.

/// Every recognized newline sequence.
///
/// Ordered longest first: `\r\n` must be tried before `\r` so that a CRLF
/// pair is consumed as one line break.
pub const NEWLINES: [&str; 7] = [
    "\r\n", "\r", "\n", "\u{0085}", "\u{000C}", "\u{2028}", "\u{2029}",
];

/// Returns the byte length of the newline sequence starting at `offset`.
///
/// Returns `None` if no newline starts there, or if `offset` is past the end
/// of `source` or not on a character boundary.
///
/// # Example
///
/// ```
/// use kdlx_util::newline::newline_len;
///
/// assert_eq!(newline_len("a\r\nb", 1), Some(2));
/// assert_eq!(newline_len("a\rb", 1), Some(1));
/// assert_eq!(newline_len("a\u{2028}", 1), Some(3));
/// assert_eq!(newline_len("ab", 1), None);
/// assert_eq!(newline_len("ab", 10), None);
/// ```
pub fn newline_len(source: &str, offset: usize) -> Option<usize> {
    let rest = source.get(offset..)?;
    NEWLINES
        .iter()
        .find(|newline| rest.starts_with(**newline))
        .map(|newline| newline.len())
}

/// Checks if a code point can begin a newline sequence.
///
/// Every entry of [`NEWLINES`] starts with one of these characters, so this
/// is the single-character form of [`newline_len`].
#[inline]
pub fn is_newline_char(c: char) -> bool {
    matches!(
        c,
        '\r' | '\n' | '\u{0085}' | '\u{000C}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_not_split() {
        assert_eq!(newline_len("\r\n", 0), Some(2));
        assert_eq!(newline_len("\r\n", 1), Some(1));
    }

    #[test]
    fn test_all_sequences_recognized() {
        for newline in NEWLINES {
            assert_eq!(newline_len(newline, 0), Some(newline.len()));
            let first = newline.chars().next().unwrap();
            assert!(is_newline_char(first));
        }
    }

    #[test]
    fn test_mid_char_offset() {
        // Offset 1 is inside the two-byte 'é'
        assert_eq!(newline_len("é\n", 1), None);
        assert_eq!(newline_len("é\n", 2), Some(1));
    }

    #[test]
    fn test_whitespace_is_not_newline() {
        assert!(!is_newline_char(' '));
        assert!(!is_newline_char('\t'));
        assert!(!is_newline_char('\u{00A0}'));
    }
}
