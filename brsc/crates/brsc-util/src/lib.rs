//! brsc-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of types shared by every phase of the
//! brsc toolchain: source locations and the diagnostic machinery used to
//! report problems found in BrightScript source.
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking (byte offsets plus line/column)
//! - [`diagnostic`] - Diagnostics, diagnostic codes, builder and handler
//! - [`error`] - Error types for source lookups
//!
//! # Example
//!
//! ```
//! use brsc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceError, SourceResult};
pub use span::Span;

/// Returns the text of the given 1-based line, without its line terminator.
///
/// # Examples
///
/// ```
/// use brsc_util::line_text;
///
/// assert_eq!(line_text("a = 1\r\nb = 2", 1).unwrap(), "a = 1");
/// assert_eq!(line_text("a = 1\r\nb = 2", 2).unwrap(), "b = 2");
/// assert!(line_text("a = 1", 3).is_err());
/// ```
pub fn line_text(source: &str, line: u32) -> SourceResult<&str> {
    let max_lines = source.split('\n').count();
    if line == 0 || line as usize > max_lines {
        return Err(SourceError::InvalidLineNumber {
            line: line as usize,
            max_lines,
        });
    }

    let text = source
        .split('\n')
        .nth(line as usize - 1)
        .unwrap_or_default();
    Ok(text.strip_suffix('\r').unwrap_or(text))
}
