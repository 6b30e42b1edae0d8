//! Edge case tests for brsc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, scan_recovering, LexError, Lexeme, Literal, Token};
    use brsc_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens = scan(source).unwrap();
        assert_eq!(tokens.pop().map(|t| t.kind), Some(Lexeme::Eof));
        tokens
    }

    fn literal(source: &str) -> Literal {
        lex_all(source)[0].literal.clone().unwrap()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, Lexeme::Identifier);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1", name));
        assert_eq!(t[0].text, name);
    }

    #[test]
    fn test_edge_long_string() {
        let body = "z".repeat(10000);
        assert_eq!(literal(&format!("\"{}\"", body)), Literal::String(body));
    }

    #[test]
    fn test_edge_integer_bounds() {
        assert_eq!(literal("2147483647"), Literal::Double(2147483647.0));
        assert_eq!(literal("999999999"), Literal::Integer(999_999_999));
        assert_eq!(literal("0"), Literal::Integer(0));
    }

    #[test]
    fn test_edge_long_integer_bounds() {
        assert_eq!(literal("9223372036854775807&"), Literal::LongInteger(i64::MAX));
        assert!(matches!(
            scan("9223372036854775808&"),
            Err(LexError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(literal("007"), Literal::Integer(7));
    }

    #[test]
    fn test_edge_negative_is_two_tokens() {
        let t = lex_all("-5");
        assert_eq!(t[0].kind, Lexeme::Minus);
        assert_eq!(t[1].literal, Some(Literal::Integer(5)));
    }

    #[test]
    fn test_edge_number_then_dot_member() {
        let t = lex_all("1.foo");
        assert_eq!(t[0].kind, Lexeme::Integer);
        assert_eq!(t[1].kind, Lexeme::Dot);
        assert_eq!(t[2].kind, Lexeme::Identifier);
    }

    #[test]
    fn test_edge_dot_without_leading_digit() {
        let t = lex_all(".5");
        assert_eq!(t[0].kind, Lexeme::Dot);
        assert_eq!(t[1].literal, Some(Literal::Integer(5)));
    }

    #[test]
    fn test_edge_number_followed_by_ident() {
        let t = lex_all("10to");
        assert_eq!(t[0].literal, Some(Literal::Integer(10)));
        assert_eq!(t[1].kind, Lexeme::To);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("\"a\"\"\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal, Some(Literal::String("a\"".into())));
    }

    #[test]
    fn test_edge_string_then_string() {
        let t = lex_all("\"a\" \"b\"");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\n");
        let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![Lexeme::Identifier, Lexeme::Newline, Lexeme::Identifier, Lexeme::Newline]
        );
        assert_eq!(t[2].line, 2);
    }

    #[test]
    fn test_edge_blank_lines() {
        let t = lex_all("\n\n\n");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].line, 3);
    }

    #[test]
    fn test_edge_comment_only_lines() {
        let t = lex_all("' one\nrem two\n' three");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|t| t.kind == Lexeme::Newline));
    }

    #[test]
    fn test_edge_rem_after_colon() {
        let t = lex_all("x = 1 : REM trailing");
        assert_eq!(t.last().map(|t| t.kind), Some(Lexeme::Colon));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / \\ ^ < > <= >= = <> << >> += -= *= /= \\= <<= >>= ++ --");
        assert_eq!(t.len(), 23);
        assert!(t.iter().all(|t| t.literal.is_none()));
    }

    #[test]
    fn test_edge_keyword_as_member_name() {
        let t = lex_all("node.then");
        assert_eq!(t[2].kind, Lexeme::Then);
        assert_eq!(t[2].text, "then");
    }

    #[test]
    fn test_edge_unicode_in_comment_and_string() {
        let t = lex_all("s = \"日本\" ' ✓ fine");
        assert_eq!(t[2].literal, Some(Literal::String("日本".into())));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_unicode_identifier_is_error() {
        assert!(matches!(
            scan("naïve = 1"),
            Err(LexError::UnexpectedChar { ch: 'ï', line: 1, column: 3 })
        ));
    }

    #[test]
    fn test_edge_spans_are_byte_ranges() {
        let t = lex_all("\"é\" x");
        assert_eq!((t[0].span.start, t[0].span.end), (0, 4));
        assert_eq!(t[1].span.start, 5);
        assert_eq!(t[1].column(), 5);
    }

    #[test]
    fn test_edge_recovery_codes() {
        let handler = Handler::new();
        let tokens = scan_recovering("a = \"open\nb = 1.2.3\nc = @", &handler);

        let codes: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .filter_map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ]
        );
        assert_eq!(tokens.last().map(|t| t.kind), Some(Lexeme::Eof));
        assert!(tokens.iter().any(|t| t.text == "c"));
    }
}
