//! Comment skipping.
//!
//! A comment starts with `'` or with the word `REM` (any case) and runs up
//! to, but not including, the next newline.

use crate::chars::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Checks whether a comment starts at the current position.
    ///
    /// `REM` only counts as a whole word, so `remaining` or `rem_count` are
    /// still identifiers.
    pub fn at_comment_start(&self) -> bool {
        let cursor = &self.cursor;
        if cursor.current_char() == '\'' {
            return true;
        }

        cursor.peek_char(0).eq_ignore_ascii_case(&'r')
            && cursor.peek_char(1).eq_ignore_ascii_case(&'e')
            && cursor.peek_char(2).eq_ignore_ascii_case(&'m')
            && !is_ident_continue(cursor.peek_char(3))
    }

    /// Skips the rest of the line, leaving the newline for the scanner.
    pub fn skip_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }
}
