//! Expression visitor trait.
//!
//! Each method receives the fields of one [`Expr`] variant; use
//! [`Expr::accept`] to dispatch.

use loxc_lex::{Literal, Token};

use crate::expr::Expr;

/// A visitor over expression trees producing a value of type `R`.
pub trait Visitor<'src, R> {
    /// Visits `left operator right`.
    fn visit_binary(
        &mut self,
        left: &Expr<'src>,
        operator: &Token<'src>,
        right: &Expr<'src>,
    ) -> R;

    /// Visits `operator right`.
    fn visit_unary(&mut self, operator: &Token<'src>, right: &Expr<'src>) -> R;

    /// Visits a parenthesised expression.
    fn visit_grouping(&mut self, inner: &Expr<'src>) -> R;

    /// Visits a literal; `None` is `nil`.
    fn visit_literal(&mut self, value: Option<&Literal>) -> R;
}
