//! Identifier and keyword lexing.
//!
//! Identifiers are ASCII only: `[A-Za-z_][A-Za-z0-9_]*`. Reserved words are
//! scanned the same way and then classified by the keyword table.

use crate::keyword::keyword_from_ident;
use crate::token::{Token, TokenKind};

use super::Scanner;

/// Returns true if `c` can start an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'src> Scanner<'src, '_> {
    /// Scans an identifier or keyword; its first character was just consumed.
    ///
    /// Matching is maximal munch, so `orchid` is one identifier and not
    /// `or` followed by `chid`.
    pub(super) fn scan_identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
