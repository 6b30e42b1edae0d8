//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the scan entry points
//! - `comment` - `'` and `REM` comment skipping
//! - `identifier` - Identifier and reserved-word lexing
//! - `number` - Numeric literal lexing and type inference
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, scan_recovering, Lexer};
pub use self::number::{ExponentMarker, NumberShape, NumericKind, TypeSuffix};
