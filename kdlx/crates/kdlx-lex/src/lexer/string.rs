//! String literal lexing.
//!
//! This module handles quoted strings (with escapes validated in place) and
//! raw strings. Both produce [`TokenKind::String`] tokens whose text keeps
//! every delimiter; decoding is left to [`crate::cook::cook_string`].

use super::core::{Scanner, Step};
use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::token::TokenKind;
use crate::unicode::{decode_escape, EscapeError};

impl<'a> Scanner<'a> {
    /// Lexes a quoted string literal.
    ///
    /// Raw newlines are allowed inside. Errors:
    /// - end of input before the closing quote, even right after a `\`:
    ///   `UnterminatedString` at the opening quote
    /// - an escape outside the grammar: `InvalidEscape` at its backslash
    pub(crate) fn lex_quoted_string(&mut self) -> ScanResult<Step<'a>> {
        let start = self.cursor.position();
        if !self.cursor.match_char('"') {
            return Ok(Step::Declined);
        }

        loop {
            if self.cursor.is_at_end() {
                return Err(ScanError::new(ScanErrorKind::UnterminatedString, start));
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(self.token(TokenKind::String, start));
                },
                '\\' => {
                    let escape_start = self.cursor.position();
                    self.cursor.advance();
                    match decode_escape(self.cursor.remaining()) {
                        Ok((_, len)) => self.cursor.advance_bytes(len),
                        Err(EscapeError::Truncated) => {
                            return Err(ScanError::new(ScanErrorKind::UnterminatedString, start));
                        },
                        Err(EscapeError::Invalid) => {
                            return Err(ScanError::new(ScanErrorKind::InvalidEscape, escape_start));
                        },
                    }
                },
                _ => self.cursor.advance(),
            }
        }
    }

    /// Lexes a raw string literal (`r"..."` or `r#"..."#`).
    ///
    /// Declines unless the `r` is followed by optional `#`s and a `"`, so
    /// `r`, `raw` and `r#x` stay identifiers. The literal ends at the first
    /// `"` followed by as many `#`s as opened it.
    pub(crate) fn lex_raw_string(&mut self) -> ScanResult<Step<'a>> {
        let start = self.cursor.position();
        if !self.cursor.match_char('r') {
            return Ok(Step::Declined);
        }

        let hashes = self.cursor.eat_while(|c| c == '#');
        if !self.cursor.match_char('"') {
            return Ok(Step::Declined);
        }

        let closing: String = std::iter::once('"')
            .chain(std::iter::repeat('#').take(hashes))
            .collect();
        match self.cursor.remaining().find(closing.as_str()) {
            Some(body_len) => {
                self.cursor.advance_bytes(body_len + closing.len());
                Ok(self.token(TokenKind::String, start))
            },
            None => Err(ScanError::new(ScanErrorKind::UnterminatedString, start)),
        }
    }
}
