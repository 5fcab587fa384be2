//! Character classification for the kdlx scanner.
//!
//! All tables here are immutable constants. Whitespace and newlines follow
//! the document language's explicit code point lists rather than
//! [`char::is_whitespace`], which also counts U+000B and U+0085.

pub use kdlx_util::newline::{is_newline_char, newline_len, NEWLINES};

/// Byte order mark, skipped at offset 0 unless configured otherwise.
pub const BOM: char = '\u{FEFF}';

/// Non-newline whitespace code points.
pub const WHITESPACE: &[char] = &[
    '\u{0009}', '\u{0020}', '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}',
    '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}',
    '\u{200A}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// Punctuation that ends an identifier, in addition to every code point at
/// or below U+0020.
pub const RESERVED_PUNCTUATION: &[char] = &[
    '\\', '/', '(', ')', '{', '}', '<', '>', ';', '[', ']', '=', ',', '"',
];

/// Checks for an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks for an ASCII hexadecimal digit, either case.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks for an octal digit.
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Checks for a binary digit.
#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Checks if `c` is a digit in the given radix (2, 8, 10 or 16).
///
/// Any other radix has no digits.
///
/// # Example
///
/// ```
/// use kdlx_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(!is_digit_in_base('1', 3));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, radix: u32) -> bool {
    match radix {
        2 => is_binary_digit(c),
        8 => is_octal_digit(c),
        10 => is_digit(c),
        16 => is_hex_digit(c),
        _ => false,
    }
}

/// Checks for non-newline whitespace.
///
/// # Example
///
/// ```
/// use kdlx_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('\n'));
/// assert!(!is_whitespace('\u{000B}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Checks if a newline sequence starts at byte `offset` of `source`.
#[inline]
pub fn is_newline_start(source: &str, offset: usize) -> bool {
    newline_len(source, offset).is_some()
}

/// Checks if `c` ends an identifier.
///
/// Code points beyond U+10FFFF would also terminate, but a Rust `char`
/// cannot hold one.
///
/// # Example
///
/// ```
/// use kdlx_lex::unicode::is_identifier_terminator;
///
/// assert!(is_identifier_terminator('='));
/// assert!(is_identifier_terminator('\u{0001}'));
/// assert!(!is_identifier_terminator('-'));
/// ```
#[inline]
pub fn is_identifier_terminator(c: char) -> bool {
    c <= '\u{0020}' || RESERVED_PUNCTUATION.contains(&c)
}

/// Checks if `c` may appear in an identifier.
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    !is_identifier_terminator(c) && !is_whitespace(c) && !is_newline_char(c)
}

/// Why an escape sequence could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// The input ended inside the escape.
    Truncated,
    /// The escape is not part of the grammar.
    Invalid,
}

/// Longest hex digit run accepted in `\u{...}`.
const MAX_UNICODE_ESCAPE_DIGITS: usize = 6;

/// Decodes one escape sequence.
///
/// `text` starts just after the backslash. On success returns the decoded
/// character and the number of bytes of `text` the escape occupies.
///
/// # Example
///
/// ```
/// use kdlx_lex::unicode::{decode_escape, EscapeError};
///
/// assert_eq!(decode_escape("n rest"), Ok(('\n', 1)));
/// assert_eq!(decode_escape("u{1F600}"), Ok(('😀', 8)));
/// assert_eq!(decode_escape("u{D800}"), Err(EscapeError::Invalid));
/// assert_eq!(decode_escape("u{12"), Err(EscapeError::Truncated));
/// assert_eq!(decode_escape("q"), Err(EscapeError::Invalid));
/// ```
pub fn decode_escape(text: &str) -> Result<(char, usize), EscapeError> {
    let mut chars = text.chars();
    let simple = match chars.next() {
        None => return Err(EscapeError::Truncated),
        Some('"') => '"',
        Some('\\') => '\\',
        Some('/') => '/',
        Some('b') => '\u{0008}',
        Some('f') => '\u{000C}',
        Some('n') => '\n',
        Some('r') => '\r',
        Some('t') => '\t',
        Some('u') => return decode_unicode_escape(&text[1..]),
        Some(_) => return Err(EscapeError::Invalid),
    };
    Ok((simple, 1))
}

/// Decodes the `{H...}` part of a `\u` escape.
fn decode_unicode_escape(text: &str) -> Result<(char, usize), EscapeError> {
    let Some(body) = text.strip_prefix('{') else {
        return Err(if text.is_empty() {
            EscapeError::Truncated
        } else {
            EscapeError::Invalid
        });
    };

    let digits = body.chars().take_while(char::is_ascii_hexdigit).count();
    // input ended inside the braces, however many digits came first
    if digits == body.len() {
        return Err(EscapeError::Truncated);
    }
    if digits == 0 || digits > MAX_UNICODE_ESCAPE_DIGITS || !body[digits..].starts_with('}') {
        return Err(EscapeError::Invalid);
    }

    let value = u32::from_str_radix(&body[..digits], 16).map_err(|_| EscapeError::Invalid)?;
    let c = char::from_u32(value).ok_or(EscapeError::Invalid)?;
    // 'u' + '{' + digits + '}'
    Ok((c, digits + 3))
}
