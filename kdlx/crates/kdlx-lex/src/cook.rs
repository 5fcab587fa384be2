//! Literal cooking: turning token text into the value it denotes.
//!
//! The scanner validates literals but keeps their raw text. A consumer that
//! needs values calls these helpers on the tokens it cares about. String
//! decoding uses the same escape grammar the scanner validated with.
//!
//! # Example
//!
//! ```
//! use kdlx_lex::cook::{cook_integer, cook_string};
//! use kdlx_lex::tokenize;
//!
//! let tokens = tokenize(r#"node "a\tb" 0xff_ff"#).unwrap();
//! assert_eq!(cook_string(&tokens[1]).unwrap(), "a\tb");
//! assert_eq!(cook_integer(&tokens[2]).unwrap(), 0xffff);
//! ```

use std::borrow::Cow;

use thiserror::Error;

use crate::token::{Token, TokenKind};
use crate::unicode::decode_escape;

/// Errors from cooking a token.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CookError {
    /// The token is not of a kind this helper accepts.
    #[error("expected {expected}, found {found}")]
    WrongKind {
        /// What the helper accepts.
        expected: &'static str,
        /// The kind it was given.
        found: TokenKind,
    },

    /// A string token's delimiters are missing or unbalanced.
    #[error("malformed string literal `{text}`")]
    MalformedString {
        /// The token text.
        text: String,
    },

    /// A string contains an escape outside the grammar.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Source offset of the backslash.
        offset: usize,
    },

    /// An integer literal does not fit in `i128`.
    #[error("integer literal `{text}` is out of range")]
    IntegerOutOfRange {
        /// The token text.
        text: String,
    },

    /// A float literal is not a finite `f64`.
    #[error("invalid float literal `{text}`")]
    InvalidFloat {
        /// The token text.
        text: String,
    },
}

/// Result type for cooking helpers.
pub type CookResult<T> = Result<T, CookError>;

fn expect_kind(token: &Token<'_>, expected: &'static str, accepts: &[TokenKind]) -> CookResult<()> {
    if accepts.contains(&token.kind) {
        Ok(())
    } else {
        Err(CookError::WrongKind {
            expected,
            found: token.kind,
        })
    }
}

/// Returns the contents of a string token.
///
/// Quoted strings have their escapes decoded; raw strings only lose their
/// delimiters. Borrows from the source when nothing needed decoding.
pub fn cook_string<'a>(token: &Token<'a>) -> CookResult<Cow<'a, str>> {
    expect_kind(token, "a string literal", &[TokenKind::String])?;
    let text = token.text;
    let malformed = || CookError::MalformedString {
        text: text.to_string(),
    };

    if let Some(raw) = text.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let body = raw
            .get(hashes..raw.len().saturating_sub(hashes))
            .and_then(|quoted| quoted.strip_prefix('"'))
            .and_then(|quoted| quoted.strip_suffix('"'))
            .ok_or_else(malformed)?;
        if !raw.ends_with(&raw[..hashes]) {
            return Err(malformed());
        }
        return Ok(Cow::Borrowed(body));
    }

    let body = text
        .strip_prefix('"')
        .and_then(|quoted| quoted.strip_suffix('"'))
        .ok_or_else(malformed)?;
    if !body.contains('\\') {
        return Ok(Cow::Borrowed(body));
    }

    let mut cooked = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(backslash) = rest.find('\\') {
        cooked.push_str(&rest[..backslash]);
        let after = &rest[backslash + 1..];
        let (c, len) = decode_escape(after).map_err(|_| CookError::InvalidEscape {
            // body starts one byte into the token
            offset: token.start + 1 + (body.len() - rest.len()) + backslash,
        })?;
        cooked.push(c);
        rest = &after[len..];
    }
    cooked.push_str(rest);
    Ok(Cow::Owned(cooked))
}

/// Returns the value of an integer token.
///
/// Accepts decimal, hexadecimal, octal and binary tokens. Separators are
/// ignored and a sign is honored.
pub fn cook_integer(token: &Token<'_>) -> CookResult<i128> {
    expect_kind(
        token,
        "an integer literal",
        &[
            TokenKind::Decimal,
            TokenKind::Hexadecimal,
            TokenKind::Octal,
            TokenKind::Binary,
        ],
    )?;
    let after_prefix = token.text.get(2..).unwrap_or_default();
    let (radix, body) = match token.kind {
        TokenKind::Hexadecimal => (16, after_prefix),
        TokenKind::Octal => (8, after_prefix),
        TokenKind::Binary => (2, after_prefix),
        _ => (10, token.text),
    };
    let digits: String = body.chars().filter(|&c| c != '_').collect();
    i128::from_str_radix(&digits, radix).map_err(|_| CookError::IntegerOutOfRange {
        text: token.text.to_string(),
    })
}

/// Returns the value of a float or decimal token as `f64`.
pub fn cook_float(token: &Token<'_>) -> CookResult<f64> {
    expect_kind(token, "a float literal", &[TokenKind::Float, TokenKind::Decimal])?;
    let digits: String = token.text.chars().filter(|&c| c != '_').collect();
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CookError::InvalidFloat {
            text: token.text.to_string(),
        }),
    }
}

/// Returns the value of a boolean token.
pub fn cook_bool(token: &Token<'_>) -> CookResult<bool> {
    expect_kind(token, "a boolean", &[TokenKind::Bool])?;
    Ok(token.text == "true")
}
