//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing source code
//! locations as byte offsets together with human-readable line/column
//! information.
//!
//! # Examples
//!
//! ```
//! use brsc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "1:11");
//! ```

use std::fmt;

use crate::error::{SourceError, SourceResult};

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the start (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use brsc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use brsc_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 7);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge two spans into one covering both.
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use brsc_util::span::Span;
    ///
    /// let a = Span::new(0, 2, 1, 1);
    /// let b = Span::new(5, 9, 1, 6);
    /// let merged = a.to(b);
    /// assert_eq!((merged.start, merged.end), (0, 9));
    /// assert_eq!(merged.column, 1);
    /// ```
    pub fn to(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Extract the source text covered by this span.
    ///
    /// # Examples
    ///
    /// ```
    /// use brsc_util::span::Span;
    ///
    /// let span = Span::new(6, 11, 1, 7);
    /// assert_eq!(span.slice("print hello").unwrap(), "hello");
    /// ```
    pub fn slice<'s>(&self, source: &'s str) -> SourceResult<&'s str> {
        source
            .get(self.start..self.end)
            .ok_or(SourceError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
