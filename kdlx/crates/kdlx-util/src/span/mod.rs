//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets plus the line/column of the first byte.
//!
//! # Examples
//!
//! ```
//! use kdlx_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source text, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use kdlx_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert!(!span.is_empty());
/// assert_eq!(span.to_string(), "1:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
