//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, the scan loop, and the
//! per-character dispatch into the sub-scanners.

use loxc_util::Reporter;

use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

use super::is_ident_start;

/// Scanner for Lox source code.
///
/// The scanner walks the whole source once and produces every token,
/// ending with a single `Eof`. Lexical errors go to the injected
/// [`Reporter`] and never stop the scan.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
///
/// let mut errors = Vec::new();
/// let mut on_error = |line: usize, message: &str| errors.push((line, message.to_string()));
///
/// let tokens = Scanner::new("var x = 1; @", &mut on_error).scan_tokens();
///
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].kind, TokenKind::Var);
/// assert_eq!(tokens[5].kind, TokenKind::Eof);
/// assert_eq!(errors, vec![(1, "Unexpected character: @.".to_string())]);
/// ```
pub struct Scanner<'src, 'r> {
    /// Character cursor over the source; owns position and line.
    pub(super) cursor: Cursor<'src>,

    /// Where lexical errors go.
    reporter: &'r mut dyn Reporter,

    /// Tokens produced so far, append-only.
    tokens: Vec<Token<'src>>,

    /// Byte offset where the token being scanned starts.
    pub(super) start: usize,
}

impl<'src, 'r> Scanner<'src, 'r> {
    /// Creates a scanner over `source` reporting errors to `reporter`.
    pub fn new(source: &'src str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            tokens: Vec::new(),
            start: 0,
        }
    }

    /// Scans the whole source and returns its tokens.
    ///
    /// The result always ends with exactly one `Eof` token whose lexeme is
    /// empty and whose line is the last line of the source. Consumes the
    /// scanner: a source is scanned once.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        while !self.cursor.is_at_end() {
            self.start = self.cursor.position();
            if let Some(token) = self.scan_token() {
                self.tokens.push(token);
            }
        }

        self.tokens.push(Token::eof(self.cursor.line()));
        self.tokens
    }

    /// Scans one lexeme starting at `self.start`.
    ///
    /// Returns `None` for whitespace, comments, and malformed input.
    fn scan_token(&mut self) -> Option<Token<'src>> {
        let c = self.cursor.advance()?;

        match c {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '.' => Some(self.make_token(TokenKind::Dot)),
            '-' => Some(self.make_token(TokenKind::Minus)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '*' => Some(self.make_token(TokenKind::Star)),
            '!' | '=' | '<' | '>' => Some(self.scan_operator(c)),
            '/' => self.scan_slash(),
            // The cursor counts the newline itself.
            ' ' | '\r' | '\t' | '\n' => None,
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => Some(self.scan_identifier()),
            c => {
                self.report_error(&format!("Unexpected character: {}.", c));
                None
            },
        }
    }

    /// Source text of the token being scanned.
    pub(super) fn lexeme(&self) -> &'src str {
        self.cursor.slice_from(self.start)
    }

    /// Builds a literal-free token over the current lexeme.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.lexeme(), None, self.cursor.line())
    }

    /// Builds a token carrying `literal` over the current lexeme.
    pub(super) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token<'src> {
        Token::new(kind, self.lexeme(), Some(literal), self.cursor.line())
    }

    /// Reports a lexical error on the current line.
    pub(super) fn report_error(&mut self, message: &str) {
        let line = self.cursor.line();
        self.reporter.report(line, message);
    }
}
