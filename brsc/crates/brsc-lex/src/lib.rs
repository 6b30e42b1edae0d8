//! brsc-lex - Lexical Analyzer for BrightScript
//!
//! This crate turns BrightScript source text into a flat sequence of tokens
//! for a parser to consume. Every token records its kind, the exact source
//! text, a typed literal value where one applies, and its location.
//!
//! # Example Usage
//!
//! ```
//! use brsc_lex::{scan, Lexeme, Literal};
//!
//! let tokens = scan("x% = 42\n").unwrap();
//! let kinds: Vec<Lexeme> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![Lexeme::Identifier, Lexeme::Equal, Lexeme::Integer, Lexeme::Newline, Lexeme::Eof]
//! );
//! assert_eq!(tokens[2].literal, Some(Literal::Integer(42)));
//!
//! // Or pull tokens one at a time
//! let mut lexer = brsc_lex::Lexer::new("print 1");
//! assert_eq!(lexer.next_token().unwrap().kind, Lexeme::Print);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, lexeme and literal definitions plus the reserved words
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words are matched case-insensitively: `if`, `IF` and `iF` are
//! the same keyword. A name with a type designator (`if$`) is always an
//! identifier.
//!
//! ## Identifiers
//!
//! Pattern: `[A-Za-z_][A-Za-z0-9_]*` with an optional trailing `$ % ! # &`.
//!
//! ## Literals
//!
//! - **String**: `"hello"`, `"say ""hi"""`
//! - **Integer**: `42`
//! - **LongInteger**: `42&`
//! - **Float**: `1.5`, `2e3`, `3!`
//! - **Double**: `1.5#`, `2d3`, `2147483648`
//!
//! ## Comments
//!
//! `'` or `REM` to end of line. The newline itself is still a token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{scan, scan_recovering, ExponentMarker, Lexer, NumberShape, NumericKind, TypeSuffix};
pub use token::{keyword_from_ident, Lexeme, Literal, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use brsc_util::Handler;

    fn kinds(source: &str) -> Vec<Lexeme> {
        scan(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        scan(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_hello_world_program() {
        let source = "sub Main()\n    print \"Hello, World!\"\nend sub\n";
        let tokens = scan(source).unwrap();

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                Lexeme::Sub,
                Lexeme::Identifier,
                Lexeme::LeftParen,
                Lexeme::RightParen,
                Lexeme::Newline,
                Lexeme::Print,
                Lexeme::String,
                Lexeme::Newline,
                Lexeme::End,
                Lexeme::Sub,
                Lexeme::Newline,
                Lexeme::Eof,
            ]
        );
        assert_eq!(tokens[6].literal, Some(Literal::String("Hello, World!".into())));
        assert_eq!(tokens[6].line, 2);
        assert_eq!(tokens[8].line, 3);
    }

    #[test]
    fn test_fibonacci_function() {
        let source = r#"
function Fib(n as integer) as integer
    if n <= 1 then return n
    return Fib(n - 1) + Fib(n - 2)
end function
"#;
        let kinds = kinds(source);

        assert!(kinds.contains(&Lexeme::Function));
        assert!(kinds.contains(&Lexeme::If));
        assert!(kinds.contains(&Lexeme::Then));
        assert!(kinds.contains(&Lexeme::Return));
        assert!(kinds.contains(&Lexeme::LessEqual));
        assert!(kinds.contains(&Lexeme::Minus));
        assert!(kinds.contains(&Lexeme::Plus));
        assert_eq!(kinds.iter().filter(|k| **k == Lexeme::Eof).count(), 1);
    }

    #[test]
    fn test_for_loop_with_step() {
        let source = "for i% = 10 to 0 step -2 : ? i% : next";
        assert_eq!(
            texts(source),
            vec!["for", "i%", "=", "10", "to", "0", "step", "-", "2", ":", "?", "i%", ":", "next", ""]
        );
        assert_eq!(
            kinds(source)[..5],
            [Lexeme::For, Lexeme::Identifier, Lexeme::Equal, Lexeme::Integer, Lexeme::To]
        );
    }

    #[test]
    fn test_associative_array_literal() {
        let source = "obj = { name: \"box\", size: 1.5#, items: [1, 2&] }";
        let tokens = scan(source).unwrap();
        let literals: Vec<_> = tokens.iter().filter_map(|t| t.literal.clone()).collect();

        assert_eq!(
            literals,
            vec![
                Literal::String("box".into()),
                Literal::Double(1.5),
                Literal::Integer(1),
                Literal::LongInteger(2),
            ]
        );
        assert!(tokens.iter().any(|t| t.kind == Lexeme::LeftBrace));
        assert!(tokens.iter().any(|t| t.kind == Lexeme::LeftSquare));
    }

    #[test]
    fn test_member_access_and_comments() {
        let source = "m.top.visible = true ' show it\nREM all done";
        assert_eq!(
            kinds(source),
            vec![
                Lexeme::Identifier,
                Lexeme::Dot,
                Lexeme::Identifier,
                Lexeme::Dot,
                Lexeme::Identifier,
                Lexeme::Equal,
                Lexeme::True,
                Lexeme::Newline,
                Lexeme::Eof,
            ]
        );
    }

    #[test]
    fn test_boolean_operators() {
        assert_eq!(
            kinds("if not a and b or c then"),
            vec![
                Lexeme::If,
                Lexeme::Not,
                Lexeme::Identifier,
                Lexeme::And,
                Lexeme::Identifier,
                Lexeme::Or,
                Lexeme::Identifier,
                Lexeme::Then,
                Lexeme::Eof,
            ]
        );
    }

    #[test]
    fn test_scan_and_iterator_agree() {
        let source = "x = 1.5e2 ' comment\ny$ = \"a\"\"b\"";
        let scanned = scan(source).unwrap();
        let iterated: Vec<Token> = Lexer::new(source).collect::<LexResult<_>>().unwrap();
        assert_eq!(scanned, iterated);
    }

    #[test]
    fn test_recovering_matches_scan_without_errors() {
        let source = "while i < 10\n  i += 1\nend while";
        let handler = Handler::new();
        assert_eq!(scan_recovering(source, &handler), scan(source).unwrap());
        assert!(!handler.has_errors());
    }
}
