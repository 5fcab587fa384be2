//! Identifier lexing.
//!
//! The identifier recognizer runs last and takes whatever the others left:
//! any run of characters that are not whitespace, newlines or reserved
//! punctuation. Symbols outside the literal table (`-`, `!`, `.`, `@`, ...)
//! are therefore identifier text.

use super::core::{Scanner, Step};
use crate::token::TokenKind;
use crate::unicode::is_identifier_char;

impl<'a> Scanner<'a> {
    /// Lexes a maximal run of identifier characters.
    pub(crate) fn lex_identifier(&mut self) -> Step<'a> {
        let start = self.cursor.position();
        if self.cursor.eat_while(is_identifier_char) == 0 {
            return Step::Declined;
        }
        self.token(TokenKind::Identifier, start)
    }
}
