use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    #[display("integer")]
    Integer,
    #[display("string")]
    String,
    #[display("bool")]
    Bool,
    #[display("null")]
    Null,
    #[display("variable")]
    Variable,

    #[display("==")]
    Equals,
    #[display("!=")]
    NotEquals,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,

    #[display("&&")]
    And,
    #[display("||")]
    Or,

    #[display("group")]
    Group,
}

impl Token {
    pub fn is_literal(self) -> bool {
        matches!(self, Token::Integer | Token::String | Token::Bool | Token::Null)
    }
}
