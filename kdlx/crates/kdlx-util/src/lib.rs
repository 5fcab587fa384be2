//! kdlx-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the types shared by every kdlx phase:
//!
//! - [`newline`] - the document language's newline sequences, shared by line
//!   numbering and the scanner so both agree on where a line ends
//! - [`span`] - byte-offset spans and [`SourceFile`] (offset → line/column)
//! - [`diagnostic`] - diagnostics, codes, snippets and the collecting
//!   [`Handler`]
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. NO PHASE LOGIC
//!    Nothing here knows about tokens; the scanner and any later phase build
//!    on these types.
//!
//! 2. BYTE OFFSETS EVERYWHERE
//!    Offsets are UTF-8 byte offsets into the original text. Line/column are
//!    derived on demand, only when a human needs to read them.

pub mod diagnostic;
pub mod newline;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::{SourceFile, Span};
