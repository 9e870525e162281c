use crate::ast::*;

use super::context::Context;
use super::error::ParseError;
use super::lex::LexItem;
use super::MAX_GROUP_DEPTH;

use crate::token::Token;

pub fn parse(items: &[LexItem]) -> Result<Expression, ParseError> {
    parse_at_depth(items, 0)
}

fn parse_at_depth(items: &[LexItem], depth: usize) -> Result<Expression, ParseError> {
    let mut state = Context::new(items, depth);
    let expr = parse_expr(&mut state)?;
    match state.get_curr() {
        Err(_) => Ok(expr),
        Ok(li) => Err(ParseError::Unfinished(li.token(), li.span())),
    }
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_or(state)
}

fn parse_or(state: &mut Context) -> Result<Expression, ParseError> {
    parse_binary_level(state, &[Token::Or], Expression::Or, parse_and)
}

fn parse_and(state: &mut Context) -> Result<Expression, ParseError> {
    parse_binary_level(state, &[Token::And], Expression::And, parse_equality)
}

fn parse_equality(state: &mut Context) -> Result<Expression, ParseError> {
    parse_binary_level(
        state,
        &[Token::Equals, Token::NotEquals],
        Expression::Equality,
        parse_comparison,
    )
}

fn parse_comparison(state: &mut Context) -> Result<Expression, ParseError> {
    parse_binary_level(
        state,
        &[Token::Lt, Token::Lte, Token::Gt, Token::Gte],
        Expression::Comparison,
        parse_primary,
    )
}

// Every level is non-associative: at most one operator is consumed, a second
// one is left for the caller and ends up as leftover tokens.
fn parse_binary_level<F>(
    state: &mut Context,
    match_tokens: &'static [Token],
    make_node: fn(BinaryOpNode) -> Expression,
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let lhs = lower_fn(state)?;

    if !state.peek(match_tokens) {
        return Ok(lhs);
    }

    let op = state.get_curr()?;
    state.advance();
    let rhs = lower_fn(state)?;
    Ok(make_node(BinaryOpNode::new(lhs, op.token(), op.span(), rhs)))
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr()?;
    let expr = match li.token() {
        Token::Group => parse_group(li, state.depth())?,
        Token::Variable => Expression::Variable(parse_leaf(li)?),
        t if t.is_literal() => Expression::Literal(parse_leaf(li)?),
        t => return Err(ParseError::UnexpectedToken(t, li.span())),
    };
    state.advance();
    Ok(expr)
}

fn parse_leaf(li: &LexItem) -> Result<LeafNode, ParseError> {
    let Some(text) = li.as_text() else {
        return Err(ParseError::UnexpectedToken(li.token(), li.span()));
    };
    Ok(LeafNode {
        token: li.token(),
        text: text.to_string(),
        span: li.span(),
    })
}

fn parse_group(li: &LexItem, depth: usize) -> Result<Expression, ParseError> {
    if depth >= MAX_GROUP_DEPTH {
        return Err(ParseError::TooDeep(MAX_GROUP_DEPTH, li.span()));
    }
    match li.as_group() {
        Some([]) => Err(ParseError::EmptyGroup(li.span())),
        Some(items) => parse_at_depth(items, depth + 1),
        None => Err(ParseError::UnexpectedToken(li.token(), li.span())),
    }
}
