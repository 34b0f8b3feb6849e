//! Reserved-word table.
//!
//! Identifiers are scanned generically first; the finished lexeme is then
//! looked up here. Matching is exact and case-sensitive, so `classify` and
//! `Class` are ordinary identifiers.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved spelling and the kind it scans as.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static KEYWORD_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Looks up a completed identifier in the keyword table.
///
/// Returns `None` for ordinary identifiers.
///
/// # Example
///
/// ```
/// use loxc_lex::keyword_from_ident;
/// use loxc_lex::token::TokenKind;
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(text).copied()
}
