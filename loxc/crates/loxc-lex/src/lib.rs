//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat list of tokens in a single
//! left-to-right pass. It is the first stage of the front end; later stages
//! consume the returned `Vec<Token>` and never look at raw source.
//!
//! # Example Usage
//!
//! ```
//! use loxc_util::Handler;
//! use loxc_lex::{Scanner, TokenKind};
//!
//! let mut handler = Handler::new();
//! let tokens = Scanner::new("print 1 + 2;", &mut handler).scan_tokens();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and literal definitions
//! - [`keyword`] - Reserved-word table
//! - [`cursor`] - Character cursor for source traversal
//! - [`scanner`] - The scanner itself
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (no sign, exponent, or bare dot)
//! - **String**: `"hello"` (may span lines, no escapes)
//!
//! ## Operators and Delimiters
//!
//! `( ) { } , . - + ; / *` and `! != = == < <= > >=`
//!
//! ## Errors
//!
//! Unexpected characters, unterminated strings and unrepresentable numbers
//! are reported with their line number through a [`Reporter`]. Scanning
//! always continues and always ends with an `EOF` token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod keyword;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

use loxc_util::{Diagnostic, Handler, Reporter};

// Re-export main types for convenience
pub use cursor::Cursor;
pub use keyword::keyword_from_ident;
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

/// Scans `source`, sending lexical errors to `reporter`.
///
/// Shorthand for `Scanner::new(source, reporter).scan_tokens()`.
pub fn scan<'src>(source: &'src str, reporter: &mut dyn Reporter) -> Vec<Token<'src>> {
    Scanner::new(source, reporter).scan_tokens()
}

/// Scans `source` and returns its tokens together with every diagnostic.
///
/// # Example
///
/// ```
/// let (tokens, diagnostics) = loxc_lex::tokenize("1 @");
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].to_string(), "[line 1] Error: Unexpected character: @.");
/// ```
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let tokens = scan(source, &mut handler);
    (tokens, handler.take_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).0.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_hello_world_program() {
        let (tokens, diagnostics) = tokenize("print \"Hello, world!\";");
        assert!(diagnostics.is_empty());

        let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Print print nil",
                "String \"Hello, world!\" Hello, world!",
                "Semicolon ; nil",
                "EOF  nil",
            ]
        );
    }

    #[test]
    fn test_class_program() {
        let source = r#"
            class Breakfast < Meal {
              cook() {
                print "Eggs a-fryin'!";
              }

              serve(who) {
                return super.serve(who) and this.ok != nil;
              }
            }
        "#;
        let (tokens, diagnostics) = tokenize(source);
        assert!(diagnostics.is_empty());

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Class));
        assert!(kinds.contains(&TokenKind::Less));
        assert!(kinds.contains(&TokenKind::Return));
        assert!(kinds.contains(&TokenKind::Super));
        assert!(kinds.contains(&TokenKind::And));
        assert!(kinds.contains(&TokenKind::This));
        assert!(kinds.contains(&TokenKind::BangEqual));
        assert!(kinds.contains(&TokenKind::Nil));
        assert_eq!(tokens.last().map(|t| t.line), Some(11));
    }

    #[test]
    fn test_loop_program() {
        let source = "for (var i = 0; i < 10; i = i + 1) {\n  print i / 2.5;\n}\n";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::For,
                TokenKind::LeftParen,
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Less,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_error_recovery_continues() {
        let (tokens, diagnostics) = tokenize("var x = # 42;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
    }

    #[test]
    fn test_scan_with_closure() {
        let mut lines = Vec::new();
        let mut on_error = |line: usize, _: &str| lines.push(line);
        let tokens = scan("a\n\"open", &mut on_error);
        assert_eq!(tokens.len(), 2);
        assert_eq!(lines, vec![2]);
    }

    #[test]
    fn test_property_always_ends_with_single_eof() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let (tokens, _) = tokenize(&input);
            let last = tokens.last().unwrap();
            prop_assert_eq!(last.kind, TokenKind::Eof);
            prop_assert_eq!(last.lexeme, "");
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        });
    }

    #[test]
    fn test_property_lines_never_decrease() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \\n\"/+.@]{0,200}")| {
            let (tokens, diagnostics) = tokenize(&input);
            let newlines = input.matches('\n').count();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].line <= pair[1].line);
            }
            prop_assert_eq!(tokens.last().unwrap().line, newlines + 1);
            for diagnostic in &diagnostics {
                prop_assert!(diagnostic.line >= 1 && diagnostic.line <= newlines + 1);
            }
        });
    }

    #[test]
    fn test_property_arbitrary_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let (tokens, diagnostics) = tokenize(&input);
            prop_assert!(diagnostics.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
            let expected = keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_numbers() {
        use proptest::prelude::*;

        proptest!(|(whole in "[0-9]{1,20}", frac in "[0-9]{1,10}")| {
            let input = format!("{}.{}", whole, frac);
            let (tokens, _) = tokenize(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            let expected: f64 = input.parse().unwrap();
            prop_assert_eq!(tokens[0].literal.clone(), Some(Literal::Number(expected)));
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"]{0,100}")| {
            let source = format!("\"{}\"", input);
            let (tokens, diagnostics) = tokenize(&source);
            prop_assert!(diagnostics.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::String);
            prop_assert_eq!(tokens[0].literal.clone(), Some(Literal::String(input.clone())));
        });
    }
}
