//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use brsc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use brsc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(2, 3, 1, 3))
//!     .emit(&handler);
//!
//! let rendered = handler.diagnostics()[0].render("x $ 1");
//! assert!(rendered.starts_with("error[E1001]: unexpected character '$'"));
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;
use std::fmt::Write as _;

use crate::{line_text, Span};

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that makes the input unusable
    Error,
    /// A warning that doesn't stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Whether this level counts as an error
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        DiagnosticBuilder::error(message).span(span).build()
    }

    /// Render the diagnostic against the source it was produced from.
    ///
    /// The output mirrors the familiar rustc layout: a header line, a
    /// location pointer, the offending source line and a caret underline.
    /// When the span does not point into `source` only the header, pointer
    /// and trailing notes are rendered.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self);
        let _ = writeln!(out, " --> {}", self.span);

        if let Ok(text) = line_text(source, self.span.line) {
            let gutter = self.span.line.to_string();
            let pad = " ".repeat(gutter.len());
            let column = self.span.column.max(1) as usize;
            let remaining = text.chars().count().saturating_sub(column - 1);
            let width = self
                .span
                .slice(source)
                .map(|s| s.chars().take_while(|&c| c != '\n').count())
                .unwrap_or(1)
                .clamp(1, remaining.max(1));

            let _ = writeln!(out, "{} |", pad);
            let _ = writeln!(out, "{} | {}", gutter, text);
            let _ = writeln!(
                out,
                "{} | {}{}",
                pad,
                " ".repeat(column - 1),
                "^".repeat(width)
            );
        }

        for note in &self.notes {
            let _ = writeln!(out, "  = note: {}", note);
        }
        for help in &self.helps {
            let _ = writeln!(out, "  = help: {}", help);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics emitted while processing one source.
///
/// Emission goes through a shared reference so that a handler can be passed
/// down into scanning code without threading `&mut` everywhere.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Whether any error-level diagnostic was emitted
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of error-level diagnostics emitted
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Snapshot of everything emitted so far, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler and return its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }

    /// Drop every collected diagnostic
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
