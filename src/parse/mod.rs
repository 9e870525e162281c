mod context;
mod error;
mod lex;
mod parser;

pub use error::{LexError, ParseError};
pub use lex::{lex, LexItem, LexValue};
pub use parser::parse;

/// Deepest parenthesis nesting accepted by the lexer and the parser.
pub const MAX_GROUP_DEPTH: usize = 128;
