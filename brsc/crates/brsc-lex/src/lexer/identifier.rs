//! Identifier and keyword lexing.

use crate::chars::{is_ident_continue, is_type_designator};
use crate::token::{keyword_from_ident, Lexeme, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores, and may end in one type designator
    /// (`$ % ! # &`). Undecorated names are looked up case-insensitively in
    /// the reserved-word table; the token text keeps the source spelling.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `Lexeme::EndIf`) or `Lexeme::Identifier`
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_continue);

        if is_type_designator(self.cursor.current_char()) {
            self.cursor.advance();
            return self.make_token(Lexeme::Identifier);
        }

        let kind = keyword_from_ident(self.token_text()).unwrap_or(Lexeme::Identifier);
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Lexeme, Token};
    use crate::Lexer;

    fn lex_ident(source: &str) -> Token {
        Lexer::new(source).lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind, Lexeme::Identifier);
        assert_eq!(token.text, "foo");
        assert!(token.literal.is_none());
    }

    #[test]
    fn test_identifier_with_underscores() {
        let token = lex_ident("_abc_123_");
        assert_eq!(token.kind, Lexeme::Identifier);
        assert_eq!(token.text, "_abc_123_");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(lex_ident("MyVar").text, "MyVar");
    }

    #[test]
    fn test_keywords_any_case() {
        let cases = [
            ("iF", Lexeme::If),
            ("ELSE", Lexeme::Else),
            ("eNDIf", Lexeme::EndIf),
            ("FUncTioN", Lexeme::Function),
            ("Box", Lexeme::Box),
            ("RETURN", Lexeme::Return),
            ("mod", Lexeme::Mod),
            ("And", Lexeme::And),
            ("not", Lexeme::Not),
            ("TRUE", Lexeme::True),
            ("false", Lexeme::False),
            ("Invalid", Lexeme::Invalid),
        ];
        for (source, kind) in cases {
            let token = lex_ident(source);
            assert_eq!(token.kind, kind, "{}", source);
            assert_eq!(token.text, source);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("iffy").kind, Lexeme::Identifier);
        assert_eq!(lex_ident("end_if").kind, Lexeme::Identifier);
    }

    #[test]
    fn test_type_designators() {
        for source in ["name$", "count%", "ratio!", "total#", "big&"] {
            let token = lex_ident(source);
            assert_eq!(token.kind, Lexeme::Identifier);
            assert_eq!(token.text, source);
        }
    }

    #[test]
    fn test_designated_keyword_is_identifier() {
        let token = lex_ident("if$");
        assert_eq!(token.kind, Lexeme::Identifier);
        assert_eq!(token.text, "if$");
    }

    #[test]
    fn test_only_one_designator() {
        let mut lexer = Lexer::new("a$$");
        assert_eq!(lexer.lex_identifier().text, "a$");
        assert_eq!(lexer.position(), 2);
    }
}
