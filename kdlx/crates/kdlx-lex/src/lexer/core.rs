//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct and its driver loop. At every
//! position the recognizers are tried in a fixed priority order; the first
//! one that consumes input wins. A recognizer that declines has the cursor
//! restored to where it was handed control, so the cursor only moves forward
//! across dispatches.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::token::{Token, TokenKind};
use crate::unicode::BOM;

/// Where the driver is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// More input remains.
    Scanning,
    /// The whole input was consumed.
    Done,
    /// The scan stopped at an error. Further calls return the same error.
    Failed(ScanError),
}

/// Outcome of one recognizer attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step<'a> {
    /// Input was consumed and a token produced.
    Token(Token<'a>),
    /// Input was consumed without producing a token.
    Skipped,
    /// The recognizer does not apply here.
    Declined,
}

/// The recognizers, in the order they are tried at each position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Recognizer {
    Whitespace,
    Newline,
    QuotedString,
    RawString,
    Number,
    Literal,
    NodeComment,
    Identifier,
}

impl Recognizer {
    const PRIORITY: [Recognizer; 8] = [
        Recognizer::Whitespace,
        Recognizer::Newline,
        Recognizer::QuotedString,
        Recognizer::RawString,
        Recognizer::Number,
        Recognizer::Literal,
        Recognizer::NodeComment,
        Recognizer::Identifier,
    ];
}

/// Scanner for kdlx documents.
///
/// The scanner turns document text into [`Token`]s. Drive it to completion
/// with [`Scanner::scan`], pull tokens one at a time with
/// [`Scanner::next_token`], or iterate it.
///
/// # Example
///
/// ```
/// use kdlx_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("node key=1").scan().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Equal, TokenKind::Decimal]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Options for this scan.
    pub(crate) config: ScanConfig,

    /// Tokens produced so far, in source order.
    tokens: Vec<Token<'a>>,

    /// Driver state.
    state: ScanState,

    /// Whether the start of input (and its byte order mark) was handled.
    started: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(source: &'a str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            tokens: Vec::new(),
            state: ScanState::Scanning,
            started: false,
        }
    }

    /// Scans the whole input.
    ///
    /// Returns every token in source order, or the first error.
    pub fn scan(mut self) -> ScanResult<Vec<Token<'a>>> {
        while self.next_token()?.is_some() {}
        Ok(self.tokens)
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// Once the scanner has failed, every call returns the same error; once
    /// it is done, every call returns `Ok(None)`.
    pub fn next_token(&mut self) -> ScanResult<Option<Token<'a>>> {
        match self.state {
            ScanState::Scanning => {},
            ScanState::Done => return Ok(None),
            ScanState::Failed(error) => return Err(error),
        }

        if !self.started {
            self.start();
        }

        loop {
            if self.cursor.is_at_end() {
                self.state = ScanState::Done;
                debug!(tokens = self.tokens.len(), "scan finished");
                return Ok(None);
            }

            match self.dispatch() {
                Ok(Some(token)) => {
                    trace!(kind = ?token.kind, start = token.start, text = token.text, "token");
                    self.tokens.push(token);
                    return Ok(Some(token));
                },
                Ok(None) => {},
                Err(error) => {
                    self.state = ScanState::Failed(error);
                    debug!(kind = ?error.kind, offset = error.offset, "scan failed");
                    return Err(error);
                },
            }
        }
    }

    /// Handles the start of input: logs, then skips a leading byte order
    /// mark when configured to.
    fn start(&mut self) {
        self.started = true;
        debug!(source_len = self.cursor.source().len(), "scan started");
        if self.config.skip_bom && self.cursor.current_char() == BOM {
            self.cursor.advance();
        }
    }

    /// Runs the recognizers at the current position in priority order.
    ///
    /// Returns `Ok(None)` if input was skipped silently.
    fn dispatch(&mut self) -> ScanResult<Option<Token<'a>>> {
        let start = self.cursor.snapshot();
        for recognizer in Recognizer::PRIORITY {
            match self.run(recognizer)? {
                Step::Token(token) => return Ok(Some(token)),
                Step::Skipped => {
                    debug_assert!(self.cursor.position() > start.position);
                    return Ok(None);
                },
                Step::Declined => self.cursor.restore(start),
            }
        }
        Err(ScanError::new(ScanErrorKind::UnmatchedInput, start.position))
    }

    fn run(&mut self, recognizer: Recognizer) -> ScanResult<Step<'a>> {
        match recognizer {
            Recognizer::Whitespace => Ok(self.skip_whitespace()),
            Recognizer::Newline => Ok(self.skip_newline()),
            Recognizer::QuotedString => self.lex_quoted_string(),
            Recognizer::RawString => self.lex_raw_string(),
            Recognizer::Number => self.lex_number(),
            Recognizer::Literal => Ok(self.lex_literal()),
            Recognizer::NodeComment => Ok(self.lex_node_comment()),
            Recognizer::Identifier => Ok(self.lex_identifier()),
        }
    }

    /// Builds a token of `kind` spanning `start` to the cursor.
    #[inline]
    pub(crate) fn token(&self, kind: TokenKind, start: usize) -> Step<'a> {
        Step::Token(Token::new(kind, start, self.cursor.slice_from(start)))
    }

    /// Returns the tokens produced so far.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Returns the driver state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token<'a>>;

    /// Yields tokens, then at most one error, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, ScanState::Failed(_)) {
            return None;
        }
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeparatorPolicy;

    #[test]
    fn test_state_transitions() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.state(), ScanState::Scanning);
        assert!(scanner.next_token().unwrap().is_some());
        assert_eq!(scanner.state(), ScanState::Scanning);
        assert_eq!(scanner.next_token(), Ok(None));
        assert_eq!(scanner.state(), ScanState::Done);
        assert_eq!(scanner.next_token(), Ok(None));
    }

    #[test]
    fn test_failed_state_is_sticky() {
        let mut scanner = Scanner::new("a \\ b");
        assert!(scanner.next_token().unwrap().is_some());
        let error = scanner.next_token().unwrap_err();
        assert_eq!(error, ScanError::new(ScanErrorKind::UnmatchedInput, 2));
        assert_eq!(scanner.state(), ScanState::Failed(error));
        assert_eq!(scanner.next_token(), Err(error));
        assert_eq!(scanner.position(), 2);
    }

    #[test]
    fn test_iterator_yields_error_once() {
        let items: Vec<_> = Scanner::new("a <").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1], Err(ScanError::new(ScanErrorKind::UnmatchedInput, 2)));
    }

    #[test]
    fn test_tokens_accumulate() {
        let mut scanner = Scanner::new("a b");
        while let Ok(Some(_)) = scanner.next_token() {}
        assert_eq!(scanner.tokens().len(), 2);
        assert_eq!(scanner.tokens()[1].start, 2);
    }

    #[test]
    fn test_bom_skipped_by_default() {
        let tokens = Scanner::new("\u{FEFF}node").scan().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start, 3);
        assert_eq!(tokens[0].text, "node");
    }

    #[test]
    fn test_bom_kept_when_configured() {
        let config = ScanConfig::default().with_skip_bom(false);
        let tokens = Scanner::with_config("\u{FEFF}node", config).scan().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].text, "\u{FEFF}node");
    }

    #[test]
    fn test_only_leading_bom_is_skipped() {
        let tokens = Scanner::new("a \u{FEFF}").scan().unwrap();
        assert_eq!(tokens[1].text, "\u{FEFF}");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_config_accessor() {
        let config = ScanConfig::default().with_separators(SeparatorPolicy::Lenient);
        let scanner = Scanner::with_config("", config);
        assert_eq!(scanner.config().separators, SeparatorPolicy::Lenient);
    }

    #[test]
    fn test_priority_order_starts_with_trivia() {
        assert_eq!(Recognizer::PRIORITY[0], Recognizer::Whitespace);
        assert_eq!(Recognizer::PRIORITY[7], Recognizer::Identifier);
    }
}
