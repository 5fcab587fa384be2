//! Source files and line/column computation.
//!
//! This module provides the [`SourceFile`] type, which maps byte offsets to
//! line/column coordinates using the document language's newline table.

use std::sync::Arc;

use super::Span;
use crate::newline::{is_newline_char, newline_len};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use kdlx_util::span::SourceFile;
///
/// let file = SourceFile::new("config.kdl", "node 1\nother 2");
/// assert_eq!(file.line_at(2), Some("other 2"));
/// assert_eq!(file.offset_to_line_col(9), (2, 3));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content.
    ///
    /// Every newline sequence (including a CRLF pair) ends exactly one line.
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        let mut offset = 0;

        while offset < content.len() {
            match newline_len(content, offset) {
                Some(len) => {
                    offset += len;
                    line_starts.push(offset);
                },
                None => {
                    offset += content[offset..].chars().next().map_or(1, char::len_utf8);
                },
            }
        }

        line_starts.into()
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. Column is measured in characters from
    /// the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdlx_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.kdl", "αβ x\nnode");
    /// assert_eq!(file.offset_to_line_col(5), (1, 4));
    /// assert_eq!(file.offset_to_line_col(7), (2, 1));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => return (line + 1, 1),
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset.saturating_sub(line_start), |text| text.chars().count());
        (line + 1, column + 1)
    }

    /// Build a [`Span`] for a byte range, with the line/column of `start`.
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (line, column) = self.offset_to_line_col(start);
        Span::new(
            start,
            end,
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use kdlx_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.kdl", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(is_newline_char))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
