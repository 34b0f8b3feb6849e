//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Literal, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let (mut tokens, _) = tokenize(source);
        tokens.pop();
        tokens
    }

    fn errors(source: &str) -> Vec<String> {
        tokenize(source)
            .1
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        let (tokens, _) = tokenize("   \n\t  \r\n  ");
        assert_eq!(tokens, vec![Token::eof(3)]);
    }

    #[test]
    fn test_edge_comments_only() {
        let (tokens, _) = tokenize("// one\n// two\n// three");
        assert_eq!(tokens, vec![Token::eof(3)]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_underscore_ident() {
        let t = lex_all("_");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("var {} = 1;", name);
        let t = lex_all(&source);
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].lexeme, name);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_edge_keyword_prefix_and_suffix() {
        let t = lex_all("classy _class nil0 fun_");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_zero() {
        let t = lex_all("0 0.0");
        assert_eq!(t[0].literal, Some(Literal::Number(0.0)));
        assert_eq!(t[1].literal, Some(Literal::Number(0.0)));
        assert_eq!(t[1].to_string(), "Number 0.0 0e0");
    }

    #[test]
    fn test_edge_string_containing_comment() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(
            t[0].literal,
            Some(Literal::String("// not a comment".to_string()))
        );
    }

    #[test]
    fn test_edge_string_with_backslash_at_end() {
        let t = lex_all(r#""a\" b"#);
        assert_eq!(t[0].literal, Some(Literal::String("a\\".to_string())));
        assert_eq!(t[1].lexeme, "b");
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("\"a\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].lexeme, "\"b\"");
    }

    #[test]
    fn test_edge_slash_then_newline() {
        let t = lex_all("/\n/");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].line, 2);
    }

    #[test]
    fn test_edge_dot_only() {
        let t = lex_all("...");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Dot));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("! != = == < <= > >= + - * /");
        assert_eq!(t.len(), 12);
        assert!(t.iter().all(|tok| tok.literal.is_none()));
    }

    #[test]
    fn test_edge_consecutive_invalid_chars() {
        assert_eq!(
            errors("@#$"),
            vec![
                "[line 1] Error: Unexpected character: @.",
                "[line 1] Error: Unexpected character: #.",
                "[line 1] Error: Unexpected character: $.",
            ]
        );
    }

    #[test]
    fn test_edge_bracket_and_colon_are_invalid() {
        assert_eq!(errors("[]:").len(), 3);
        assert_eq!(errors("a % b&").len(), 2);
    }

    #[test]
    fn test_edge_emoji() {
        assert_eq!(errors("😀"), vec!["[line 1] Error: Unexpected character: 😀."]);
    }

    #[test]
    fn test_edge_null_byte() {
        let (tokens, diagnostics) = tokenize("1\0 2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\nc");
        let lines: Vec<_> = t.iter().map(|tok| tok.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_error_after_multiline_string() {
        assert_eq!(
            errors("\"one\ntwo\" @"),
            vec!["[line 2] Error: Unexpected character: @."]
        );
    }

    #[test]
    fn test_edge_unterminated_string_swallows_rest() {
        let (tokens, diagnostics) = tokenize("var s = \"abc;\nprint s;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Var, TokenKind::Identifier, TokenKind::Equal, TokenKind::Eof]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
    }
}
