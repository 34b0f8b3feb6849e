//! Slash and comment handling.
//!
//! Lox only has line comments: `//` runs to the end of the line. The newline
//! itself is left for the main loop so the line counter stays in one place.

use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Scans after a `/`: either a line comment (no token) or `Slash`.
    pub(super) fn scan_slash(&mut self) -> Option<Token<'src>> {
        if self.cursor.match_char('/') {
            self.cursor.eat_while(|c| c != '\n');
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }
}
