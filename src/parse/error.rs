use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unknown token `{0}` at position {1}")]
    UnknownToken(String, Span),

    #[error("String `{0}` starts at {1} is not closed")]
    UnclosedString(String, Span),

    #[error("Group `{0}` starts at {1} is never closed")]
    UnclosedGroup(String, Span),

    #[error("Unexpected `{0}` at {1} without a matching `(`")]
    UnexpectedCloseParen(String, Span),

    #[error("Variable `{0}` at {1} has no name after `$`")]
    EmptyVariable(String, Span),

    #[error("Group at {1} is nested deeper than {0} levels")]
    TooDeep(usize, Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        use LexError::*;
        match self {
            UnknownToken(_, s) | UnclosedString(_, s) | UnclosedGroup(_, s) => *s,
            UnexpectedCloseParen(_, s) | EmptyVariable(_, s) | TooDeep(_, s) => *s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected token `{0}` at position {1}")]
    UnexpectedToken(Token, Span),

    #[error("Unable to parse the next value because of EOF")]
    Eof,

    #[error("Group at {0} is empty")]
    EmptyGroup(Span),

    #[error("Parse have leftover tokens start with `{0}` at {1}")]
    Unfinished(Token, Span),

    #[error("Group at {1} is nested deeper than {0} levels")]
    TooDeep(usize, Span),
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        use ParseError::*;
        match self {
            UnexpectedToken(_, s) | EmptyGroup(s) | Unfinished(_, s) | TooDeep(_, s) => Some(*s),
            Eof => None,
        }
    }
}
