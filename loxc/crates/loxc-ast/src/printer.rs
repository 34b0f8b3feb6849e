//! Parenthesised tree printer.
//!
//! Every operator node prints as `(name operand...)`, groupings as
//! `(group inner)`, literals in their token display form and an absent
//! literal as `nil`.

use loxc_lex::{Literal, Token};

use crate::expr::Expr;
use crate::visitor::Visitor;

/// Renders expression trees as fully parenthesised prefix text.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders `expr`.
    pub fn print(mut self, expr: &Expr<'_>) -> String {
        expr.accept(&mut self)
    }

    fn parenthesize<'src>(&mut self, name: &str, exprs: &[&Expr<'src>]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            let rendered: String = expr.accept(self);
            out.push(' ');
            out.push_str(&rendered);
        }
        out.push(')');
        out
    }
}

impl<'src> Visitor<'src, String> for AstPrinter {
    fn visit_binary(
        &mut self,
        left: &Expr<'src>,
        operator: &Token<'src>,
        right: &Expr<'src>,
    ) -> String {
        self.parenthesize(operator.lexeme, &[left, right])
    }

    fn visit_unary(&mut self, operator: &Token<'src>, right: &Expr<'src>) -> String {
        self.parenthesize(operator.lexeme, &[right])
    }

    fn visit_grouping(&mut self, inner: &Expr<'src>) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_literal(&mut self, value: Option<&Literal>) -> String {
        match value {
            Some(literal) => literal.to_string(),
            None => "nil".to_string(),
        }
    }
}
