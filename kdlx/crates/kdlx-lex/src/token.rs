//! Token definitions for the kdlx scanner.
//!
//! A [`Token`] is a classified slice of the source: it borrows its text and
//! records the byte offset where that text begins. The scanner never decodes
//! literals; see [`crate::cook`] for turning token text into values.

use std::fmt;
use std::ops::Range;

/// The closed set of lexical categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare identifier, including every symbol not in the literal table.
    Identifier,
    /// The `/-` node-comment marker.
    NodeComment,
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Quoted or raw string literal, delimiters included.
    String,

    // Punctuation
    /// `+`
    Plus,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `=` or `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `*`
    Star,
    /// `~`
    Tilde,
    /// `^`
    Caret,
    /// `$`
    Dollar,
    /// `>`
    Greater,
    /// `||`
    DoublePipe,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,

    // Numbers
    /// `0x` literal
    Hexadecimal,
    /// `0b` literal
    Binary,
    /// `0o` literal
    Octal,
    /// Integer without fraction or exponent
    Decimal,
    /// Decimal with a fraction, an exponent, or both
    Float,
}

impl TokenKind {
    /// Returns true for the five numeric kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::TokenKind;
    ///
    /// assert!(TokenKind::Hexadecimal.is_number());
    /// assert!(TokenKind::Float.is_number());
    /// assert!(!TokenKind::String.is_number());
    /// ```
    pub fn is_number(self) -> bool {
        matches!(
            self,
            TokenKind::Hexadecimal
                | TokenKind::Binary
                | TokenKind::Octal
                | TokenKind::Decimal
                | TokenKind::Float
        )
    }

    /// Returns true for kinds that denote a value: numbers, strings,
    /// booleans and `null`.
    pub fn is_literal(self) -> bool {
        self.is_number() || matches!(self, TokenKind::String | TokenKind::Bool | TokenKind::Null)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::NodeComment => "node comment `/-`",
            TokenKind::Null => "`null`",
            TokenKind::Bool => "boolean",
            TokenKind::String => "string literal",
            TokenKind::Plus => "`+`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Equal => "`=`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::Star => "`*`",
            TokenKind::Tilde => "`~`",
            TokenKind::Caret => "`^`",
            TokenKind::Dollar => "`$`",
            TokenKind::Greater => "`>`",
            TokenKind::DoublePipe => "`||`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Hexadecimal => "hexadecimal literal",
            TokenKind::Binary => "binary literal",
            TokenKind::Octal => "octal literal",
            TokenKind::Decimal => "decimal literal",
            TokenKind::Float => "float literal",
        };
        f.write_str(name)
    }
}

/// A classified slice of the source.
///
/// `text` is exactly `&source[start..start + text.len()]`, delimiters and
/// signs included.
///
/// # Example
///
/// ```
/// use kdlx_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("key=\"v\"").unwrap();
/// let value = tokens[2];
/// assert_eq!(value.kind, TokenKind::String);
/// assert_eq!(value.text, "\"v\"");
/// assert_eq!(value.range(), 4..7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Lexical category.
    pub kind: TokenKind,
    /// Byte offset of the first byte of `text`.
    pub start: usize,
    /// The matched source text.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[inline]
    pub fn new(kind: TokenKind, start: usize, text: &'a str) -> Self {
        Self { kind, start, text }
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length of the token text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Tokens are never empty; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte range of the token in the source.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.text, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_positions() {
        let token = Token::new(TokenKind::Identifier, 3, "node");
        assert_eq!(token.end(), 7);
        assert_eq!(token.len(), 4);
        assert_eq!(token.range(), 3..7);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::Null.is_literal());
        assert!(TokenKind::Bool.is_literal());
        assert!(TokenKind::Octal.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::NodeComment.is_literal());
        assert!(!TokenKind::Equal.is_literal());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::DoublePipe.to_string(), "`||`");
        let token = Token::new(TokenKind::Decimal, 0, "12");
        assert_eq!(token.to_string(), "decimal literal `12` at 0");
    }
}
