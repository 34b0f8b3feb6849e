//! loxc-ast - Expression tree for the Lox Programming Language
//!
//! This crate defines the expression node model that sits on top of the
//! scanner's tokens, a [`Visitor`] trait for walking it, and [`AstPrinter`],
//! which renders a tree in fully parenthesised prefix form.
//!
//! # Example
//!
//! ```
//! use loxc_ast::{AstPrinter, Expr};
//! use loxc_lex::{Literal, Token, TokenKind};
//!
//! let expr = Expr::binary(
//!     Expr::unary(Token::new(TokenKind::Minus, "-", None, 1), Expr::literal(Literal::Number(123.0))),
//!     Token::new(TokenKind::Star, "*", None, 1),
//!     Expr::grouping(Expr::literal(Literal::Number(45.67))),
//! );
//!
//! assert_eq!(AstPrinter.print(&expr), "(* (- 1.23e2) (group 4.567e1))");
//! ```

#![warn(missing_docs)]

pub mod expr;
pub mod printer;
pub mod visitor;

pub use expr::Expr;
pub use printer::AstPrinter;
pub use visitor::Visitor;
