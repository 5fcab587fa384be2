//! Number literal lexing.
//!
//! This module handles the radix literals (`0x`, `0b`, `0o`) and signed
//! decimal/float literals. Tokens keep their prefix, sign and separators;
//! [`crate::cook`] converts them to values.
//!
//! # Number Formats
//!
//! - Hexadecimal: `0xFF`, `0xAB_CD`
//! - Binary: `0b1010`, `0b1111_0000`
//! - Octal: `0o777`
//! - Decimal: `42`, `-7`, `+1_000`
//! - Float: `3.14`, `1e10`, `-2.5E-3`

use super::core::{Scanner, Step};
use crate::config::SeparatorPolicy;
use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::token::TokenKind;
use crate::unicode::{is_digit, is_digit_in_base};

/// Radix prefixes, their radix and the kind they produce.
static RADIX_PREFIXES: [(&str, u32, TokenKind); 3] = [
    ("0x", 16, TokenKind::Hexadecimal),
    ("0b", 2, TokenKind::Binary),
    ("0o", 8, TokenKind::Octal),
];

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// A radix prefix commits to that radix: if no digit follows it, the
    /// whole number recognizer declines rather than falling back to decimal,
    /// so `0xg` is one identifier and not `0` followed by `xg`.
    pub(crate) fn lex_number(&mut self) -> ScanResult<Step<'a>> {
        let prefixed = RADIX_PREFIXES
            .iter()
            .find(|(prefix, _, _)| self.cursor.starts_with(prefix));
        match prefixed {
            Some(&(prefix, radix, kind)) => self.lex_radix_number(prefix, radix, kind),
            None => self.lex_decimal(),
        }
    }

    /// Lexes the digits after a radix prefix.
    ///
    /// A `_` directly after the prefix is an error at the literal's start;
    /// any other non-digit declines.
    fn lex_radix_number(&mut self, prefix: &str, radix: u32, kind: TokenKind) -> ScanResult<Step<'a>> {
        let start = self.cursor.position();
        self.cursor.advance_bytes(prefix.len());

        let c = self.cursor.current_char();
        if c == '_' {
            return Err(ScanError::new(ScanErrorKind::InvalidNumericLiteral, start));
        }
        if self.cursor.is_at_end() || !is_digit_in_base(c, radix) {
            return Ok(Step::Declined);
        }

        self.lex_digits(radix, start)?;
        Ok(self.token(kind, start))
    }

    /// Lexes a decimal or float literal with an optional sign.
    ///
    /// A digit is required after the sign, otherwise this declines: a lone
    /// `+` is left to the punctuation table and a lone `-` to identifiers.
    fn lex_decimal(&mut self) -> ScanResult<Step<'a>> {
        let start = self.cursor.position();
        let sign_len = match self.cursor.current_char() {
            '+' | '-' => 1,
            _ => 0,
        };
        if self.cursor.is_at_end() || !is_digit(self.cursor.peek_char(sign_len)) {
            return Ok(Step::Declined);
        }
        self.cursor.advance_bytes(sign_len);
        self.lex_digits(10, start)?;

        let mut kind = TokenKind::Decimal;

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.lex_digits(10, start)?;
            kind = TokenKind::Float;
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let digit_at = match self.cursor.peek_char(1) {
                '+' | '-' => 2,
                _ => 1,
            };
            if is_digit(self.cursor.peek_char(digit_at)) {
                self.cursor.advance_bytes(digit_at);
                self.lex_digits(10, start)?;
                kind = TokenKind::Float;
            }
        }

        Ok(self.token(kind, start))
    }

    /// Consumes a digit run starting at a digit of `radix`.
    ///
    /// Separators may repeat between digits. The run stops at the first
    /// character that is neither a digit nor `_`; a run ending in `_` is an
    /// invalid literal (reported at `literal_start`) under the strict policy.
    fn lex_digits(&mut self, radix: u32, literal_start: usize) -> ScanResult<()> {
        let run_start = self.cursor.position();
        self.cursor.eat_while(|c| c == '_' || is_digit_in_base(c, radix));

        let trailing_separator = self.cursor.slice_from(run_start).ends_with('_');
        if trailing_separator && self.config.separators == SeparatorPolicy::Strict {
            return Err(ScanError::new(ScanErrorKind::InvalidNumericLiteral, literal_start));
        }
        Ok(())
    }
}
