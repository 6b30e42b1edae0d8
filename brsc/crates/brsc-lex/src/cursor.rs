//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// Returned by every lookahead once the source is exhausted.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use brsc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 1");
///
/// assert_eq!(cursor.current_char(), 'x');
/// assert_eq!(cursor.advance(), 'x');
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one
    /// (0 = current), or [`EOF_CHAR`] past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use brsc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<=");
    /// assert_eq!(cursor.peek_char(1), '<');
    /// assert_eq!(cursor.peek_char(2), '=');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: everything up to the requested char is ASCII.
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line and column tracking. Returns [`EOF_CHAR`] and does
    /// nothing if already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use brsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes characters while `predicate` holds for the current one.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use brsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<>");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
