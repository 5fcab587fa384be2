//! Scanner module.
//!
//! The scanner is split into focused components, each adding recognizer
//! methods to [`Scanner`]:
//! - `core` - Scanner struct, driver loop and recognizer priority
//! - `whitespace` - Silent whitespace and newline skipping
//! - `string` - Quoted and raw string literals
//! - `number` - Radix, decimal and float literals
//! - `literal` - Keywords, punctuation and the node-comment marker
//! - `identifier` - Bare identifiers (the fallback)

mod core;
mod identifier;
mod literal;
mod number;
mod string;
mod whitespace;

pub use self::core::{ScanState, Scanner};
pub use self::literal::literal_table;
