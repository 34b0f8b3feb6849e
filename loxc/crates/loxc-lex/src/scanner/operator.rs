//! Operator lexing.
//!
//! This module handles the operators that may take a trailing `=`.

use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Scans an operator whose first character `first` was just consumed.
    ///
    /// Handles: `!`, `!=`, `=`, `==`, `<`, `<=`, `>`, `>=`
    ///
    /// The two-character form wins whenever the next character is `=`.
    pub(super) fn scan_operator(&mut self, first: char) -> Token<'src> {
        let (single, with_equal) = match first {
            '!' => (TokenKind::Bang, TokenKind::BangEqual),
            '=' => (TokenKind::Equal, TokenKind::EqualEqual),
            '<' => (TokenKind::Less, TokenKind::LessEqual),
            _ => (TokenKind::Greater, TokenKind::GreaterEqual),
        };

        let kind = if self.cursor.match_char('=') {
            with_equal
        } else {
            single
        };
        self.make_token(kind)
    }
}
