//! Token definitions.
//!
//! A [`Token`] is what the scanner hands to later stages: a [`TokenKind`],
//! the exact slice of source it was read from, the decoded [`Literal`] for
//! strings and numbers, and the line it ended on.

use std::fmt;

use serde::Serialize;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A name that is not a reserved word
    Identifier,
    /// A double-quoted string
    String,
    /// A decimal number
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenKind {
    /// Name used in the textual token form.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LeftParen",
            RightParen => "RightParen",
            LeftBrace => "LeftBrace",
            RightBrace => "RightBrace",
            Comma => "Comma",
            Dot => "Dot",
            Minus => "Minus",
            Plus => "Plus",
            Semicolon => "Semicolon",
            Slash => "Slash",
            Star => "Star",
            Bang => "Bang",
            BangEqual => "BangEqual",
            Equal => "Equal",
            EqualEqual => "EqualEqual",
            Greater => "Greater",
            GreaterEqual => "GreaterEqual",
            Less => "Less",
            LessEqual => "LessEqual",
            Identifier => "Identifier",
            String => "String",
            Number => "Number",
            And => "And",
            Class => "Class",
            Else => "Else",
            False => "False",
            Fun => "Fun",
            For => "For",
            If => "If",
            Nil => "Nil",
            Or => "Or",
            Print => "Print",
            Return => "Return",
            Super => "Super",
            This => "This",
            True => "True",
            Var => "Var",
            While => "While",
            Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded value of a `String` or `Number` token.
///
/// There is no "nil" variant: a token without a value carries `None`.
///
/// # Example
///
/// ```
/// use loxc_lex::token::Literal;
///
/// assert_eq!(Literal::Number(123.0).to_string(), "1.23e2");
/// assert_eq!(Literal::String("hi".into()).to_string(), "hi");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Text between the quotes of a string literal
    String(String),
    /// Value of a number literal
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            // Shortest scientific form that parses back to the same f64.
            Literal::Number(n) => write!(f, "{:e}", n),
        }
    }
}

/// A scanned token.
///
/// `lexeme` borrows from the source; `line` is 1-based.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Exact source text consumed for this token.
    pub lexeme: &'src str,
    /// Decoded value, present only for `String` and `Number`.
    pub literal: Option<Literal>,
    /// Line the token was completed on.
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'src str, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// The end-of-input marker: empty lexeme, no literal.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}
