//! Evaluates small boolean/relational expressions such as
//! `($role == 'admin' || $level >= 3) && $active` against a table of named
//! values.
//!
//! The pipeline is `source -> tokens -> tree -> value`: [`parse::lex`] turns
//! the source into tokens (parenthesized groups nest), [`parse::parse`] builds
//! an [`Expression`], and [`interpret()`] walks it against [`Bindings`].

pub mod ast;
pub mod interpret;
pub mod parse;
pub mod span;
pub mod token;

use log::trace;
use thiserror::Error;

pub use ast::Expression;
pub use interpret::{Bindings, EvalError, Interpreter, Value};
pub use parse::{LexError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Lexes, parses and evaluates `source`. Variables missing from `bindings`
/// read as `null`.
///
/// ```
/// use expr_eval::{evaluate, Bindings, Value};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("a".to_string(), Value::from(5u64));
/// assert_eq!(evaluate("$a > 1 && $a < 10", &bindings), Ok(Value::Bool(true)));
/// ```
pub fn evaluate(source: &str, bindings: &Bindings) -> Result<Value, Error> {
    let expr = compile(source)?;
    Ok(interpret(&expr, bindings)?)
}

/// Lexes and parses `source` without evaluating it, so one condition can be
/// checked against many binding tables.
pub fn compile(source: &str) -> Result<Expression, Error> {
    let tokens = parse::lex(source)?;
    let expr = parse::parse(&tokens)?;
    trace!("{}", expr);
    Ok(expr)
}

/// Evaluates an already compiled expression. Only evaluation errors remain
/// possible at this point.
pub fn interpret(expr: &Expression, bindings: &Bindings) -> Result<Value, EvalError> {
    let value = Interpreter::new(bindings).interpret(expr)?;
    trace!("{} => {}", expr, value);
    Ok(value)
}
