use super::error::EvalError;
use super::natural::Natural;
use super::value::{Bindings, Value};
use crate::ast::*;
use crate::token::Token;

pub struct Interpreter<'b> {
    bindings: &'b Bindings,
}

impl<'b> Interpreter<'b> {
    pub fn new(bindings: &'b Bindings) -> Self {
        Self { bindings }
    }

    pub fn interpret(&self, expr: &Expression) -> Result<Value, EvalError> {
        match expr {
            Expression::Or(node) => self.interpret_or(node),
            Expression::And(node) => self.interpret_and(node),
            Expression::Equality(node) => self.interpret_equality(node),
            Expression::Comparison(node) => self.interpret_comparison(node),
            Expression::Literal(leaf) => interpret_literal(leaf),
            Expression::Variable(leaf) => self.interpret_variable(leaf),
        }
    }

    // `||` and `&&` hand back the right-hand value untouched, so the result is
    // only a bool when the operands are.
    fn interpret_or(&self, node: &BinaryOpNode) -> Result<Value, EvalError> {
        if node.op != Token::Or {
            return Err(EvalError::UnknownOperation(node.op));
        }
        let lhs = self.interpret(&node.lhs)?;
        if lhs == Value::Bool(true) {
            return Ok(lhs);
        }
        self.interpret(&node.rhs)
    }

    fn interpret_and(&self, node: &BinaryOpNode) -> Result<Value, EvalError> {
        if node.op != Token::And {
            return Err(EvalError::UnknownOperation(node.op));
        }
        let lhs = self.interpret(&node.lhs)?;
        if lhs == Value::Bool(false) {
            return Ok(lhs);
        }
        self.interpret(&node.rhs)
    }

    fn interpret_equality(
        &self,
        BinaryOpNode { lhs, op, rhs, .. }: &BinaryOpNode,
    ) -> Result<Value, EvalError> {
        let expect_equal = match op {
            Token::Equals => true,
            Token::NotEquals => false,
            _ => return Err(EvalError::UnknownOperation(*op)),
        };
        let lhs_val = self.interpret(lhs)?;
        let rhs_val = self.interpret(rhs)?;
        Ok(Value::Bool((lhs_val == rhs_val) == expect_equal))
    }

    fn interpret_comparison(
        &self,
        BinaryOpNode { lhs, op, rhs, .. }: &BinaryOpNode,
    ) -> Result<Value, EvalError> {
        if !matches!(op, Token::Lt | Token::Lte | Token::Gt | Token::Gte) {
            return Err(EvalError::UnknownOperation(*op));
        }
        let lhs_val = self.interpret(lhs)?;
        let rhs_val = self.interpret(rhs)?;
        interpret_ordering(lhs_val, *op, rhs_val)
    }

    fn interpret_variable(&self, leaf: &LeafNode) -> Result<Value, EvalError> {
        let name = match (leaf.token, leaf.text.strip_prefix('$')) {
            (Token::Variable, Some(name)) => name,
            _ => return Err(EvalError::UnexpectedLeaf(leaf.token)),
        };
        Ok(self.bindings.get(name).cloned().unwrap_or(Value::Null))
    }
}

fn interpret_literal(leaf: &LeafNode) -> Result<Value, EvalError> {
    match leaf.token {
        Token::Integer => Natural::from_digits(&leaf.text)
            .map(Value::Integer)
            .ok_or_else(|| EvalError::InvalidInteger(leaf.text.clone())),
        Token::String => Ok(Value::Str(leaf.text.clone())),
        Token::Bool => match leaf.text.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(EvalError::InvalidBool(leaf.text.clone())),
        },
        Token::Null => Ok(Value::Null),
        _ => Err(EvalError::UnexpectedLeaf(leaf.token)),
    }
}

fn interpret_ordering(lhs: Value, op: Token, rhs: Value) -> Result<Value, EvalError> {
    let o = match (&lhs, &rhs) {
        (Value::Integer(l), Value::Integer(r)) => l.cmp(r),
        (Value::Str(l), Value::Str(r)) => l.cmp(r),
        _ => return Err(EvalError::MismatchType(op, lhs, rhs)),
    };
    match op {
        Token::Lt => Ok(Value::Bool(o.is_lt())),
        Token::Lte => Ok(Value::Bool(o.is_le())),
        Token::Gt => Ok(Value::Bool(o.is_gt())),
        Token::Gte => Ok(Value::Bool(o.is_ge())),
        _ => Err(EvalError::UnknownOperation(op)),
    }
}
