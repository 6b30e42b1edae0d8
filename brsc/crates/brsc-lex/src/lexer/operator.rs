//! Operator and punctuation lexing.
//!
//! Multi-character operators are matched greedily: `<<=` before `<<`
//! before `<`, and so on.

use crate::error::{LexError, LexResult};
use crate::token::{Lexeme, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation character.
    ///
    /// # Returns
    ///
    /// The operator token, or [`LexError::UnexpectedChar`] if no operator
    /// starts with the current character. The character is consumed either
    /// way.
    pub fn lex_operator(&mut self) -> LexResult<Token> {
        let c = self.cursor.advance();
        let kind = match c {
            '(' => Lexeme::LeftParen,
            ')' => Lexeme::RightParen,
            '{' => Lexeme::LeftBrace,
            '}' => Lexeme::RightBrace,
            '[' => Lexeme::LeftSquare,
            ']' => Lexeme::RightSquare,
            ',' => Lexeme::Comma,
            '.' => Lexeme::Dot,
            ':' => Lexeme::Colon,
            ';' => Lexeme::Semicolon,
            '?' => Lexeme::Print,
            '^' => Lexeme::Caret,
            '=' => Lexeme::Equal,
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_with_assign(Lexeme::Star, Lexeme::StarEqual),
            '/' => self.lex_with_assign(Lexeme::Slash, Lexeme::SlashEqual),
            '\\' => self.lex_with_assign(Lexeme::Backslash, Lexeme::BackslashEqual),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            ch => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    line: self.token_line(),
                    column: self.token_column(),
                })
            },
        };
        Ok(self.make_token(kind))
    }

    /// Handles: `+`, `++`, `+=`
    fn lex_plus(&mut self) -> Lexeme {
        if self.cursor.match_char('+') {
            Lexeme::PlusPlus
        } else if self.cursor.match_char('=') {
            Lexeme::PlusEqual
        } else {
            Lexeme::Plus
        }
    }

    /// Handles: `-`, `--`, `-=`
    fn lex_minus(&mut self) -> Lexeme {
        if self.cursor.match_char('-') {
            Lexeme::MinusMinus
        } else if self.cursor.match_char('=') {
            Lexeme::MinusEqual
        } else {
            Lexeme::Minus
        }
    }

    /// An operator that has a compound-assignment form with a trailing `=`.
    fn lex_with_assign(&mut self, plain: Lexeme, assign: Lexeme) -> Lexeme {
        if self.cursor.match_char('=') {
            assign
        } else {
            plain
        }
    }

    /// Handles: `<`, `<=`, `<>`, `<<`, `<<=`
    fn lex_less(&mut self) -> Lexeme {
        if self.cursor.match_char('=') {
            Lexeme::LessEqual
        } else if self.cursor.match_char('>') {
            Lexeme::LessGreater
        } else if self.cursor.match_char('<') {
            self.lex_with_assign(Lexeme::LeftShift, Lexeme::LeftShiftEqual)
        } else {
            Lexeme::Less
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    fn lex_greater(&mut self) -> Lexeme {
        if self.cursor.match_char('=') {
            Lexeme::GreaterEqual
        } else if self.cursor.match_char('>') {
            self.lex_with_assign(Lexeme::RightShift, Lexeme::RightShiftEqual)
        } else {
            Lexeme::Greater
        }
    }
}
