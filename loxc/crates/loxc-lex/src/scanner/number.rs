//! Number literal lexing.
//!
//! Numbers are decimal only: a run of digits, optionally followed by `.`
//! and at least one more digit. There is no sign, exponent, or leading or
//! trailing dot; `-1` is `Minus` then `Number`, and `1.` is `Number` then
//! `Dot`.

use crate::token::{Literal, Token, TokenKind};

use super::Scanner;

/// Longest prefix of a rejected lexeme echoed back in its diagnostic.
const MAX_ECHOED_LEXEME: usize = 32;

impl<'src> Scanner<'src, '_> {
    /// Scans a number literal; its first digit was just consumed.
    pub(super) fn scan_number(&mut self) -> Option<Token<'src>> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // A fractional part needs a digit after the dot.
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Some(self.make_literal_token(TokenKind::Number, Literal::Number(value)))
            },
            _ => {
                let message = format!("Invalid number literal '{}'.", echoed(lexeme));
                self.report_error(&message);
                None
            },
        }
    }
}

/// Shortens `lexeme` to `MAX_ECHOED_LEXEME` characters, marking the cut with `…`.
fn echoed(lexeme: &str) -> String {
    match lexeme.char_indices().nth(MAX_ECHOED_LEXEME) {
        Some((end, _)) => format!("{}…", &lexeme[..end]),
        None => lexeme.to_string(),
    }
}
