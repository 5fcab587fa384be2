//! Character cursor for traversing a document.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while iterating through the source. It handles UTF-8 encoding correctly
//! and never panics: every read past the end yields the `'\0'` sentinel or
//! an empty slice.
//!
//! Line and column are not tracked here. They are only needed for
//! diagnostics and are recovered from the byte offset by
//! [`SourceFile`](kdlx_util::SourceFile).

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use kdlx_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("node 1");
///
/// assert_eq!(cursor.current_char(), 'n');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'o');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source. Always on a char boundary.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0 }
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if offset == 0 {
            return match rest.as_bytes().first() {
                Some(&b) if b < 128 => b as char,
                Some(_) => rest.chars().next().unwrap_or('\0'),
                None => '\0',
            };
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Returns up to the next `n` bytes of input.
    ///
    /// The slice is clipped at the end of the source and shortened to the
    /// nearest character boundary, so it is always valid text.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβ");
    /// assert_eq!(cursor.lookahead(1), "a");
    /// assert_eq!(cursor.lookahead(2), "a");
    /// assert_eq!(cursor.lookahead(3), "aβ");
    /// assert_eq!(cursor.lookahead(10), "aβ");
    /// ```
    pub fn lookahead(&self, n: usize) -> &'a str {
        let rest = self.remaining();
        let mut end = n.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        &rest[..end]
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by `count` bytes.
    ///
    /// Callers pass the encoded width of text they have already matched.
    /// The move is clipped at the end of the source; a count that would
    /// land inside a character stops at that character's start instead.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position += self.lookahead(count).len();
    }

    /// Returns true if the remaining input starts with `text`.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// Consumes `text` if the remaining input starts with it.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("!=x");
    /// assert!(!cursor.eat("=="));
    /// assert!(cursor.eat("!="));
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn eat(&mut self, text: &str) -> bool {
        if self.starts_with(text) {
            self.position += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes the current character if it equals `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds. Returns how many bytes
    /// were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
        }
        self.position - start
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` to the current position.
    ///
    /// An out-of-order or misaligned `start` yields an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("node 1");
    /// let start = cursor.position();
    /// cursor.advance_bytes(4);
    /// assert_eq!(cursor.slice_from(start), "node");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0xg");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_bytes(2);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("node");
        assert_eq!(cursor.current_char(), 'n');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_current_char_at_end() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.current_char(), '\0');
        assert_eq!(cursor.peek_char(5), '\0');
    }

    #[test]
    fn test_lookahead_never_splits_a_char() {
        let cursor = Cursor::new("\u{2028}x");
        assert_eq!(cursor.lookahead(1), "");
        assert_eq!(cursor.lookahead(2), "");
        assert_eq!(cursor.lookahead(3), "\u{2028}");
        assert_eq!(cursor.lookahead(4), "\u{2028}x");
    }

    #[test]
    fn test_advance_bytes_is_clipped() {
        let mut cursor = Cursor::new("ab");
        cursor.advance_bytes(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);

        let mut cursor = Cursor::new("β");
        cursor.advance_bytes(1);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("123abc");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
        assert_eq!(cursor.remaining(), "abc");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 0);
    }

    #[test]
    fn test_slice_from_out_of_order() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.slice_from(2), "");
        assert_eq!(cursor.slice_from(0), "a");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("node 1");
        let snapshot = cursor.snapshot();
        cursor.advance_bytes(5);
        assert_eq!(cursor.current_char(), '1');
        cursor.restore(snapshot);
        assert_eq!(cursor.current_char(), 'n');
        assert_eq!(cursor.source(), "node 1");
    }
}
