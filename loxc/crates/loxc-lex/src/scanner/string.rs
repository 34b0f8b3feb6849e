//! String literal lexing.
//!
//! Strings are delimited by `"`, may span lines, and have no escape
//! sequences: the literal value is exactly the text between the quotes.

use crate::token::{Literal, Token, TokenKind};

use super::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Scans a string literal; the opening quote was just consumed.
    ///
    /// An unterminated string reports `Unterminated string.` on the line
    /// where input ran out and produces no token.
    pub(super) fn scan_string(&mut self) -> Option<Token<'src>> {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error("Unterminated string.");
            return None;
        }

        // Closing quote.
        self.cursor.advance();

        let lexeme = self.lexeme();
        let value = lexeme.get(1..lexeme.len() - 1).unwrap_or("");
        Some(self.make_literal_token(TokenKind::String, Literal::String(value.to_string())))
    }
}
