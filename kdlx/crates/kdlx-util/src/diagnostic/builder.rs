//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the highlighted
/// column range.
///
/// # Examples
///
/// ```
/// use kdlx_util::diagnostic::SourceSnippet;
/// use kdlx_util::span::SourceFile;
///
/// let file = SourceFile::new("a.kdl", "node 0x_");
/// let snippet = SourceSnippet::from_span(&file, file.span(5, 8)).unwrap().with_label("here");
/// assert_eq!(snippet.format(), "  1 | node 0x_\n    |      ^^^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a snippet for a span of a source file.
    ///
    /// The highlight is clipped to the end of the span's first line.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let (line_number, start_column) = file.offset_to_line_col(span.start);
        let line = file.line_at(line_number)?;
        let (end_line, end_column) = file.offset_to_line_col(span.end);
        let end_column = if end_line == line_number {
            end_column
        } else {
            line.chars().count() + 1
        };
        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with carets (^)
    /// under the relevant range. At least one caret is always drawn.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use kdlx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use kdlx_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 1, 1, 1))
///     .help("add a closing `\"`")
///     .build();
/// assert_eq!(diag.helps, vec!["add a closing `\"`"]);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::default(),
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_draws_one_caret_for_empty_span() {
        let file = SourceFile::new("t", "abc");
        let snippet = SourceSnippet::from_span(&file, file.span(3, 3)).unwrap();
        assert_eq!(snippet.format(), "  1 | abc\n    |    ^");
    }

    #[test]
    fn test_snippet_wide_line_number() {
        let source = format!("{}x", "\n".repeat(1233));
        let file = SourceFile::new("t", source.as_str());
        let snippet = SourceSnippet::from_span(&file, file.span(1233, 1234)).unwrap();
        assert_eq!(snippet.format(), "1234 | x\n     | ^");
    }

    #[test]
    fn test_snippet_from_span_clips_to_first_line() {
        let file = SourceFile::new("t", "x \"ab\ncd");
        let span = file.span(2, 8);
        let snippet = SourceSnippet::from_span(&file, span).unwrap();
        assert_eq!(snippet.line, "x \"ab");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 6);
    }

    #[test]
    fn test_builder_collects_everything() {
        let diag = DiagnosticBuilder::error("odd")
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .span(Span::new(1, 2, 1, 2))
            .help("first")
            .help("second")
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
        assert_eq!(diag.helps, vec!["first", "second"]);
        assert!(diag.snippets.is_empty());
    }
}
