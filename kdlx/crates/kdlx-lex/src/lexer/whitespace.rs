//! Whitespace and newline skipping.
//!
//! Neither recognizer emits a token. Whitespace runs are skipped whole;
//! newlines one sequence at a time, so `\r\n` is never split.

use super::core::{Scanner, Step};
use crate::unicode::{is_whitespace, newline_len};

impl<'a> Scanner<'a> {
    /// Skips a maximal run of non-newline whitespace.
    pub(crate) fn skip_whitespace(&mut self) -> Step<'a> {
        if self.cursor.eat_while(is_whitespace) > 0 {
            Step::Skipped
        } else {
            Step::Declined
        }
    }

    /// Skips one newline sequence.
    pub(crate) fn skip_newline(&mut self) -> Step<'a> {
        match newline_len(self.cursor.source(), self.cursor.position()) {
            Some(len) => {
                self.cursor.advance_bytes(len);
                Step::Skipped
            },
            None => Step::Declined,
        }
    }
}
