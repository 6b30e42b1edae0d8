//! Lexical error types.

use brsc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// The first construct the scanner could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal hit a newline or the end of input before its
    /// closing quote.
    #[error("unterminated string literal at {line}:{column}")]
    UnterminatedString {
        /// Line of the opening quote.
        line: u32,
        /// Column of the opening quote.
        column: u32,
    },

    /// A character no matcher accepts.
    #[error("unexpected character '{ch}' at {line}:{column}")]
    UnexpectedChar {
        /// The rejected character.
        ch: char,
        /// Line of the character.
        line: u32,
        /// Column of the character.
        column: u32,
    },

    /// A digit run that cannot be classified as any numeric kind.
    #[error("malformed numeric literal '{text}' at {line}:{column}: {reason}")]
    MalformedNumber {
        /// Source text of the literal as far as it was read.
        text: String,
        /// Why no numeric kind fits.
        reason: &'static str,
        /// Line where the literal starts.
        line: u32,
        /// Column where the literal starts.
        column: u32,
    },
}

/// Result type alias for scanning operations
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// 1-based line of the offending token start
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedString { line, .. }
            | LexError::UnexpectedChar { line, .. }
            | LexError::MalformedNumber { line, .. } => *line,
        }
    }

    /// 1-based column of the offending token start
    pub fn column(&self) -> u32 {
        match self {
            LexError::UnterminatedString { column, .. }
            | LexError::UnexpectedChar { column, .. }
            | LexError::MalformedNumber { column, .. } => *column,
        }
    }

    /// Stable diagnostic code for this kind of failure
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::MalformedNumber { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// Convert into a diagnostic covering `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let builder = match self {
            LexError::UnterminatedString { .. } => {
                DiagnosticBuilder::error("unterminated string literal")
                    .note("strings may not span multiple lines")
                    .help("add a closing '\"'")
            },
            LexError::UnexpectedChar { ch, .. } => {
                DiagnosticBuilder::error(format!("unexpected character '{}'", ch))
            },
            LexError::MalformedNumber { text, reason, .. } => {
                DiagnosticBuilder::error(format!("malformed numeric literal '{}'", text))
                    .note(*reason)
            },
        };
        builder.code(self.code()).span(span).build()
    }
}
