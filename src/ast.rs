use std::fmt;

use crate::span::Span;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Or(BinaryOpNode),
    And(BinaryOpNode),
    Equality(BinaryOpNode),
    Comparison(BinaryOpNode),

    Literal(LeafNode),
    Variable(LeafNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOpNode {
    pub lhs: Box<Expression>,
    pub op: Token,
    pub op_span: Span,
    pub rhs: Box<Expression>,
}

/// A single token lifted into the tree. `text` is the raw matched text; for
/// strings it excludes the quotes, for variables it keeps the `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub token: Token,
    pub text: String,
    pub span: Span,
}

impl BinaryOpNode {
    pub fn new(lhs: Expression, op: Token, op_span: Span, rhs: Expression) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            op_span,
            rhs: Box::new(rhs),
        }
    }
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Or(node)
            | Expression::And(node)
            | Expression::Equality(node)
            | Expression::Comparison(node) => {
                Span::new(node.lhs.span().start, node.rhs.span().end)
            }
            Expression::Literal(leaf) | Expression::Variable(leaf) => leaf.span,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Or(node)
            | Expression::And(node)
            | Expression::Equality(node)
            | Expression::Comparison(node) => {
                write!(f, "({} {} {})", node.lhs, node.op, node.rhs)
            }
            Expression::Literal(leaf) if leaf.token == Token::String => {
                if leaf.text.contains('\'') {
                    write!(f, "\"{}\"", leaf.text)
                } else {
                    write!(f, "'{}'", leaf.text)
                }
            }
            Expression::Literal(leaf) | Expression::Variable(leaf) => f.write_str(&leaf.text),
        }
    }
}
