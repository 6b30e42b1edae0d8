//! Core error types for brsc-util crate

use thiserror::Error;

/// Error type for source text lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested 1-based line.
        line: usize,
        /// Lines in the source.
        max_lines: usize,
    },

    /// Span out of bounds for the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Source length in bytes.
        source_len: usize,
        /// Span start byte offset.
        span_start: usize,
        /// Span end byte offset.
        span_end: usize,
    },
}

/// Result type alias for source lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
