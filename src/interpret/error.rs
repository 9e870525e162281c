use super::value::Value;
use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unknown operator `{0}`")]
    UnknownOperation(Token),

    #[error("Value `{1}` of type `{}` and value `{2}` of type `{}` cannot perform operation `{0}`", .1.type_name(), .2.type_name())]
    MismatchType(Token, Value, Value),

    #[error("Literal `{0}` is not a valid boolean")]
    InvalidBool(String),

    #[error("Literal `{0}` is not a valid integer")]
    InvalidInteger(String),

    #[error("Token `{0}` cannot be used as a leaf here")]
    UnexpectedLeaf(Token),
}
