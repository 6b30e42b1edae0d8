//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-position dispatch and
//! the whole-source entry points.

use brsc_util::{Handler, Span};
use tracing::{debug, trace};

use crate::chars::{is_horizontal_whitespace, is_ident_start};
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Lexeme, Literal, Token};

/// Lexer for BrightScript source.
///
/// The lexer transforms source text into a stream of tokens. Each call to
/// [`Lexer::next_token`] skips comments and horizontal whitespace, then
/// dispatches on the current character. Once the input is exhausted every
/// further call yields an end-of-file token.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the BOM (Byte Order Mark) has been checked.
    bom_checked: bool,

    /// Set once the iterator has handed out Eof or an error.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            done: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// # Returns
    /// The next token, a token of kind [`Lexeme::Eof`] at the end of input,
    /// or the lexical error for the construct starting at the current
    /// position. After an error the cursor sits past the offending text.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let result = self.scan_token();
        match &result {
            Ok(token) => trace!(kind = ?token.kind, line = token.line, text = %token.text, "token"),
            Err(err) => debug!(%err, "lexical error"),
        }
        result
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.current_char() == '\u{FEFF}' {
                self.cursor.advance();
            }
        }

        loop {
            self.start_token();

            if self.cursor.is_at_end() {
                return Ok(Token::eof(self.token_span()));
            }

            if self.at_comment_start() {
                self.skip_comment();
                continue;
            }

            match self.cursor.current_char() {
                c if is_horizontal_whitespace(c) => {
                    self.cursor.advance();
                },
                '\n' => {
                    self.cursor.advance();
                    return Ok(self.make_token(Lexeme::Newline));
                },
                '"' => return self.lex_string(),
                c if c.is_ascii_digit() => return self.lex_number(),
                c if is_ident_start(c) => return Ok(self.lex_identifier()),
                _ => return self.lex_operator(),
            }
        }
    }

    /// Marks the current cursor position as the start of a token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Line the current token started on.
    pub(crate) fn token_line(&self) -> u32 {
        self.token_start_line
    }

    /// Column the current token started at.
    pub(crate) fn token_column(&self) -> u32 {
        self.token_start_column
    }

    /// Text consumed for the current token so far.
    pub(crate) fn token_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    pub(crate) fn make_token(&self, kind: Lexeme) -> Token {
        Token::new(kind, self.token_text(), self.token_span())
    }

    pub(crate) fn make_literal(&self, literal: Literal) -> Token {
        Token::literal(literal, self.token_text(), self.token_span())
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields tokens up to and including the single Eof token, or up to the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == Lexeme::Eof => self.done = true,
            Err(_) => self.done = true,
            Ok(_) => {},
        }
        Some(result)
    }
}

/// Scans a whole source text.
///
/// Returns every token in order, terminated by exactly one Eof token, or
/// the first lexical error. No recovery is attempted.
///
/// # Example
///
/// ```
/// use brsc_lex::{scan, Lexeme};
///
/// let tokens = scan("x = 1").unwrap();
/// let kinds: Vec<Lexeme> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![Lexeme::Identifier, Lexeme::Equal, Lexeme::Integer, Lexeme::Eof]
/// );
/// ```
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    debug!(bytes = source.len(), "scanning source");
    let tokens = Lexer::new(source).collect::<LexResult<Vec<Token>>>()?;
    debug!(tokens = tokens.len(), "scan complete");
    Ok(tokens)
}

/// Scans a whole source text, reporting errors to `handler` instead of
/// stopping at the first one.
///
/// The offending text is skipped and scanning resumes right after it, so the
/// returned sequence has gaps wherever a diagnostic was emitted. It still
/// ends with exactly one Eof token.
///
/// # Example
///
/// ```
/// use brsc_lex::{scan_recovering, Lexeme};
/// use brsc_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = scan_recovering("a @ b", &handler);
/// assert_eq!(handler.error_count(), 1);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].kind, Lexeme::Eof);
/// ```
pub fn scan_recovering(source: &str, handler: &Handler) -> Vec<Token> {
    debug!(bytes = source.len(), "scanning source with recovery");
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let is_eof = token.kind == Lexeme::Eof;
                tokens.push(token);
                if is_eof {
                    break;
                }
            },
            Err(err) => handler.emit(err.to_diagnostic(lexer.token_span())),
        }
    }

    debug!(
        tokens = tokens.len(),
        errors = handler.error_count(),
        "scan complete"
    );
    tokens
}
