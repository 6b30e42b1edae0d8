//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Fluent builder for [`Diagnostic`]s.
///
/// # Examples
///
/// ```
/// use brsc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use brsc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '$'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .help("remove the character")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building a diagnostic with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                level,
                message: message.into(),
                span: Span::DUMMY,
                code: None,
                notes: Vec::new(),
                helps: Vec::new(),
            },
        }
    }

    /// Start building an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Attach the source location
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a note giving extra context
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the issue
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and hand the diagnostic to a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}
