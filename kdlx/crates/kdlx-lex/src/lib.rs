//! kdlx-lex - Lexical Scanner for kdlx Documents
//!
//! This crate turns the text of a kdlx document (a small, node-oriented
//! structured-document language) into a sequence of classified tokens that
//! a parser can consume.
//!
//! # Example Usage
//!
//! ```
//! use kdlx_lex::{tokenize, Scanner, TokenKind};
//!
//! let source = "package name=\"kdlx\" version=3 /-draft";
//!
//! // Scan everything at once
//! let tokens = tokenize(source).unwrap();
//! assert_eq!(tokens.len(), 9);
//! assert_eq!(tokens[2].kind, TokenKind::Equal);
//! assert_eq!(tokens[3].text, "\"kdlx\"");
//!
//! // Or pull tokens one at a time
//! let mut scanner = Scanner::new(source);
//! assert_eq!(scanner.next_token().unwrap().map(|t| t.text), Some("package"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The scanner driver and its recognizers
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification tables and escape decoding
//! - [`config`] - Scan options, loadable from TOML
//! - [`error`] - Scan errors and their diagnostics
//! - [`cook`] - Converting token text into values
//!
//! # Token Categories
//!
//! At every position the recognizers are tried in this order, and the first
//! that consumes input wins:
//!
//! 1. **Whitespace and newlines**: skipped, never emitted
//! 2. **Strings**: `"quoted \n"` with escapes, `r#"raw"#` without
//! 3. **Numbers**: `0xFF`, `0b1010`, `0o777`, `-12`, `1_000`, `2.5e-3`
//! 4. **Fixed literals**: `true`, `false`, `null`, `==`, `!=`, `||`, `=`,
//!    `,`, `;`, `>`, brackets, `+`, `*`, `~`, `^`, `$`
//! 5. **Node comment**: `/-`
//! 6. **Identifiers**: everything else that is not reserved punctuation
//!
//! If none applies the scan fails with [`ScanErrorKind::UnmatchedInput`].
//!
//! # Errors
//!
//! A scan stops at the first error. [`ScanError`] carries the byte offset;
//! [`ScanError::to_diagnostic`] renders it with line, column and a source
//! snippet.
//!
//! # Logging
//!
//! The scanner emits `tracing` events (scan start and end at `debug`, each
//! token at `trace`). It never installs a subscriber.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cook;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, ScanConfig, SeparatorPolicy};
pub use cook::{cook_bool, cook_float, cook_integer, cook_string, CookError};
pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind, ScanResult};
pub use lexer::{ScanState, Scanner};
pub use token::{Token, TokenKind};

static_assertions::assert_impl_all!(Token<'static>: Send, Sync);
static_assertions::assert_impl_all!(Scanner<'static>: Send, Sync);
static_assertions::assert_impl_all!(ScanError: Send, Sync);
static_assertions::assert_impl_all!(ScanConfig: Send, Sync);

/// Scans `source` with the default configuration.
///
/// # Example
///
/// ```
/// use kdlx_lex::{tokenize, ScanErrorKind};
///
/// assert_eq!(tokenize("a b").unwrap().len(), 2);
/// assert_eq!(tokenize("0x_").unwrap_err().kind, ScanErrorKind::InvalidNumericLiteral);
/// ```
pub fn tokenize(source: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(source).scan()
}

/// Scans `source` with the given configuration.
pub fn tokenize_with(source: &str, config: ScanConfig) -> ScanResult<Vec<Token<'_>>> {
    Scanner::with_config(source, config).scan()
}
