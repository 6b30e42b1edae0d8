//! String literal lexing.
//!
//! Strings are delimited by `"` and may not span lines. The only escape is a
//! doubled quote: `""` inside a literal stands for one `"`.

use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// # Returns
    ///
    /// A `String` token whose literal is the decoded contents, or
    /// [`LexError::UnterminatedString`] when a newline or the end of input
    /// comes before the closing quote. The newline is left unconsumed.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(LexError::UnterminatedString {
                    line: self.token_line(),
                    column: self.token_column(),
                });
            }

            let c = self.cursor.advance();
            if c == '"' {
                if self.cursor.match_char('"') {
                    content.push('"');
                    continue;
                }
                break;
            }
            content.push(c);
        }

        Ok(self.make_literal(Literal::String(content)))
    }
}
