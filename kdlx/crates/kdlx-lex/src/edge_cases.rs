//! Edge case tests for kdlx-lex
