use crate::token::Token;

use super::error::ParseError;
use super::lex::LexItem;

pub struct Context<'a> {
    items: &'a [LexItem],
    curr_pos: usize,
    // number of enclosing groups
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [LexItem], depth: usize) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn peek(&self, match_tokens: &'static [Token]) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|li| match_tokens.contains(&li.token()))
            .unwrap_or(false)
    }

    pub fn get_curr(&self) -> Result<&'a LexItem, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) => Ok(li),
            None => Err(ParseError::Eof),
        }
    }
}
