//! Fixed literal and punctuation lexing.
//!
//! The table is matched maximal-munch: entries are ordered once by length
//! (longest first, declaration order among equals) and the first entry the
//! input starts with wins. The order never depends on hashing.

use lazy_static::lazy_static;

use super::core::{Scanner, Step};
use crate::token::TokenKind;
use crate::unicode::is_identifier_char;

/// Every fixed literal, in declaration order.
const LITERALS: [(&str, TokenKind); 21] = [
    ("false", TokenKind::Bool),
    ("true", TokenKind::Bool),
    ("null", TokenKind::Null),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("||", TokenKind::DoublePipe),
    ("=", TokenKind::Equal),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (">", TokenKind::Greater),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    ("+", TokenKind::Plus),
    ("*", TokenKind::Star),
    ("~", TokenKind::Tilde),
    ("^", TokenKind::Caret),
    ("$", TokenKind::Dollar),
];

/// The node-comment marker.
const NODE_COMMENT: &str = "/-";

lazy_static! {
    static ref ORDERED_LITERALS: Vec<(&'static str, TokenKind)> = {
        let mut table = LITERALS.to_vec();
        // stable sort keeps declaration order among equal lengths
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    };
}

/// Returns the literal table in match order.
///
/// # Example
///
/// ```
/// use kdlx_lex::lexer::literal_table;
///
/// let table = literal_table();
/// assert_eq!(table[0].0, "false");
/// assert!(table.windows(2).all(|w| w[0].0.len() >= w[1].0.len()));
/// ```
pub fn literal_table() -> &'static [(&'static str, TokenKind)] {
    &ORDERED_LITERALS
}

/// Keywords only match as whole words.
fn is_keyword(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Bool | TokenKind::Null)
}

impl<'a> Scanner<'a> {
    /// Lexes the longest fixed literal at the cursor.
    ///
    /// `true`, `false` and `null` must be followed by end of input or a
    /// non-identifier character, so `nullable` is left to the identifier
    /// recognizer.
    pub(crate) fn lex_literal(&mut self) -> Step<'a> {
        let start = self.cursor.position();
        let rest = self.cursor.remaining();

        for &(text, kind) in literal_table() {
            if !rest.starts_with(text) {
                continue;
            }
            if is_keyword(kind) && rest[text.len()..].chars().next().is_some_and(is_identifier_char) {
                continue;
            }
            self.cursor.advance_bytes(text.len());
            return self.token(kind, start);
        }
        Step::Declined
    }

    /// Lexes the `/-` node-comment marker.
    pub(crate) fn lex_node_comment(&mut self) -> Step<'a> {
        let start = self.cursor.position();
        if self.cursor.eat(NODE_COMMENT) {
            self.token(TokenKind::NodeComment, start)
        } else {
            Step::Declined
        }
    }
}
