//! Scan errors.
//!
//! Every failure is fatal to the scan and carries the byte offset it was
//! detected at. [`ScanError::to_diagnostic`] turns that offset into a
//! rendered, line/column based [`Diagnostic`] for humans.

use kdlx_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, SourceSnippet};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    /// End of input was reached before a string's closing delimiter.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A numeric literal with a misplaced `_` separator.
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,

    /// No recognizer accepts the input at this position.
    #[error("unexpected input")]
    UnmatchedInput,

    /// A backslash escape outside the escape grammar.
    #[error("invalid escape sequence")]
    InvalidEscape,
}

impl ScanErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(self) -> DiagnosticCode {
        match self {
            ScanErrorKind::UnmatchedInput => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ScanErrorKind::InvalidNumericLiteral => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            ScanErrorKind::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ScanErrorKind::UnterminatedString => "string starts here",
            ScanErrorKind::InvalidNumericLiteral => "in this literal",
            ScanErrorKind::UnmatchedInput => "no token starts here",
            ScanErrorKind::InvalidEscape => "escape starts here",
        }
    }

    fn help(self) -> &'static str {
        match self {
            ScanErrorKind::UnterminatedString => "add the closing `\"` (and any `#` of a raw string)",
            ScanErrorKind::InvalidNumericLiteral => "`_` may only appear between digits",
            ScanErrorKind::UnmatchedInput => "quote the text to use it as a string",
            ScanErrorKind::InvalidEscape => {
                "valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\u{XXXX}"
            },
        }
    }
}

/// A scan failure at a byte offset.
///
/// # Example
///
/// ```
/// use kdlx_lex::{tokenize, ScanErrorKind};
///
/// let err = tokenize("node \"open").unwrap_err();
/// assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
/// assert_eq!(err.offset, 5);
/// assert_eq!(err.to_string(), "unterminated string literal at byte 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} at byte {offset}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,
    /// Byte offset the error is reported at.
    pub offset: usize,
}

impl ScanError {
    /// Creates a new scan error.
    #[inline]
    pub fn new(kind: ScanErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Stable diagnostic code for this error.
    #[inline]
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Renders the error as a diagnostic against the scanned file.
    ///
    /// The span covers the character at `offset` (empty at end of input),
    /// and a snippet of its line is attached when the offset lies inside
    /// `file`.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlx_lex::tokenize;
    /// use kdlx_util::SourceFile;
    ///
    /// let file = SourceFile::new("doc.kdl", "a 0x_");
    /// let err = tokenize(file.content()).unwrap_err();
    /// let diag = err.to_diagnostic(&file);
    /// assert_eq!(diag.to_string().lines().next(), Some("error[E1003]: invalid numeric literal"));
    /// ```
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        let width = file
            .content()
            .get(self.offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        let span = file.span(self.offset, self.offset + width);

        let mut builder = DiagnosticBuilder::error(self.kind.to_string())
            .code(self.code())
            .span(span)
            .help(self.kind.help());
        if let Some(snippet) = SourceSnippet::from_span(file, span) {
            builder = builder.snippet(snippet.with_label(self.kind.label()));
        }
        builder.build()
    }

    /// Renders the error and reports it to `handler`.
    pub fn emit(&self, file: &SourceFile, handler: &Handler) {
        handler.emit_diagnostic(self.to_diagnostic(file));
    }
}

/// Result type for scanner operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
