//! Expression nodes.

use loxc_lex::{Literal, Token};

use crate::visitor::Visitor;

/// An expression tree node.
///
/// Operator tokens are kept whole so later stages can report errors at
/// the operator's line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'src> {
    /// `left operator right`
    Binary {
        /// Left operand
        left: Box<Expr<'src>>,
        /// Operator token
        operator: Token<'src>,
        /// Right operand
        right: Box<Expr<'src>>,
    },
    /// `operator right`
    Unary {
        /// Operator token
        operator: Token<'src>,
        /// Operand
        right: Box<Expr<'src>>,
    },
    /// `( expr )`
    Grouping(Box<Expr<'src>>),
    /// A literal value; `None` is `nil`.
    Literal(Option<Literal>),
}

impl<'src> Expr<'src> {
    /// Builds a binary expression.
    pub fn binary(left: Expr<'src>, operator: Token<'src>, right: Expr<'src>) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Builds a unary expression.
    pub fn unary(operator: Token<'src>, right: Expr<'src>) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    /// Wraps `inner` in a grouping.
    pub fn grouping(inner: Expr<'src>) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Builds a literal expression.
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(Some(value))
    }

    /// The `nil` literal.
    pub fn nil() -> Self {
        Expr::Literal(None)
    }

    /// Dispatches to the visitor method for this node's variant.
    pub fn accept<R>(&self, visitor: &mut dyn Visitor<'src, R>) -> R {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Literal(value) => visitor.visit_literal(value.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::TokenKind;

    #[test]
    fn test_constructors() {
        let bang = Token::new(TokenKind::Bang, "!", None, 1);
        let expr = Expr::unary(bang.clone(), Expr::nil());
        assert_eq!(
            expr,
            Expr::Unary {
                operator: bang,
                right: Box::new(Expr::Literal(None)),
            }
        );
    }

    #[test]
    fn test_grouping_nests() {
        let expr = Expr::grouping(Expr::grouping(Expr::literal(Literal::Number(1.0))));
        match expr {
            Expr::Grouping(inner) => assert!(matches!(*inner, Expr::Grouping(_))),
            other => panic!("expected grouping, got {:?}", other),
        }
    }

    #[test]
    fn test_tree_from_scanned_tokens() {
        let (tokens, _) = loxc_lex::tokenize("1 + 2");
        let expr = Expr::binary(
            Expr::literal(Literal::Number(1.0)),
            tokens[1].clone(),
            Expr::literal(Literal::Number(2.0)),
        );
        match &expr {
            Expr::Binary { operator, .. } => assert_eq!(operator.kind, TokenKind::Plus),
            other => panic!("expected binary, got {:?}", other),
        }
    }
}
