use log::trace;
use phf::phf_map;

use super::error::LexError;
use super::MAX_GROUP_DEPTH;
use crate::span::Span;
use crate::token::Token;

static OPERATORS: phf::Map<&'static str, Token> = phf_map! {
    "==" => Token::Equals,
    "!=" => Token::NotEquals,
    "<=" => Token::Lte,
    ">=" => Token::Gte,
    "&&" => Token::And,
    "||" => Token::Or,
    "<" => Token::Lt,
    ">" => Token::Gt,
};

static KEYWORDS: phf::Map<&'static str, Token> = phf_map! {
    "true" => Token::Bool,
    "false" => Token::Bool,
    "null" => Token::Null,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexValue {
    Text(String),
    Group(Vec<LexItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexItem {
    token: Token,
    value: LexValue,
    span: Span,
}

impl LexItem {
    pub(crate) fn text(token: Token, text: impl Into<String>, span: Span) -> Self {
        debug_assert_ne!(token, Token::Group);
        LexItem {
            token,
            value: LexValue::Text(text.into()),
            span,
        }
    }

    pub(crate) fn group(items: Vec<LexItem>, span: Span) -> Self {
        LexItem {
            token: Token::Group,
            value: LexValue::Group(items),
            span,
        }
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn value(&self) -> &LexValue {
        &self.value
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            LexValue::Text(s) => Some(s),
            LexValue::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&[LexItem]> {
        match &self.value {
            LexValue::Group(items) => Some(items),
            LexValue::Text(_) => None,
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

pub fn lex(input: &str) -> Result<Vec<LexItem>, LexError> {
    let items = lex_range(input, 0, input.len(), 0)?;
    for item in &items {
        trace!("{} - {:?}", item.span, item.value);
    }
    Ok(items)
}

// Lexes `input[start..end]` sitting inside `depth` groups. Spans stay absolute
// so nested groups report positions in the original source.
fn lex_range(
    input: &str,
    start: usize,
    end: usize,
    depth: usize,
) -> Result<Vec<LexItem>, LexError> {
    let mut curr_offset = start;
    let mut result = vec![];

    while let Some(c) = input[curr_offset..end].chars().next() {
        if c.is_whitespace() {
            curr_offset += c.len_utf8();
            continue;
        }

        let item = if c.is_ascii_digit() {
            lex_integer(input, curr_offset, end)
        } else if is_quote(c) {
            lex_string(input, curr_offset, end, c)?
        } else if c == '$' {
            lex_variable(input, curr_offset, end)?
        } else if c == '(' {
            lex_group(input, curr_offset, end, depth)?
        } else if c == ')' {
            let span = Span::new(curr_offset, curr_offset + 1);
            return Err(LexError::UnexpectedCloseParen(
                span.string_from_source(input),
                span,
            ));
        } else if let Some(item) = lex_operator(input, curr_offset, end) {
            item
        } else {
            lex_keyword(input, curr_offset, end)?
        };

        curr_offset = item.span.end;
        result.push(item);
    }

    Ok(result)
}

// Offset of the first char in `input[start..end]` failing `pred`, or `end`.
fn scan_while(input: &str, start: usize, end: usize, pred: impl Fn(char) -> bool) -> usize {
    input[start..end]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

fn lex_integer(input: &str, start: usize, end: usize) -> LexItem {
    let stop = scan_while(input, start, end, |c| c.is_ascii_digit());
    let span = Span::new(start, stop);
    LexItem::text(Token::Integer, span.str_from_source(input), span)
}

fn lex_string(input: &str, start: usize, end: usize, quote: char) -> Result<LexItem, LexError> {
    let content_start = start + quote.len_utf8();
    let Some(i) = input[content_start..end].find(quote) else {
        let span = Span::new(start, end);
        return Err(LexError::UnclosedString(span.string_from_source(input), span));
    };
    let content_end = content_start + i;
    Ok(LexItem::text(
        Token::String,
        &input[content_start..content_end],
        Span::new(start, content_end + quote.len_utf8()),
    ))
}

fn lex_variable(input: &str, start: usize, end: usize) -> Result<LexItem, LexError> {
    let stop = scan_while(input, start + 1, end, is_identifier_char);
    let span = Span::new(start, stop);
    if stop == start + 1 {
        return Err(LexError::EmptyVariable(span.string_from_source(input), span));
    }
    Ok(LexItem::text(Token::Variable, span.str_from_source(input), span))
}

fn lex_group(input: &str, start: usize, end: usize, depth: usize) -> Result<LexItem, LexError> {
    if depth >= MAX_GROUP_DEPTH {
        return Err(LexError::TooDeep(MAX_GROUP_DEPTH, Span::new(start, start + 1)));
    }
    let close = find_matching_paren(input, start, end)?;
    let items = lex_range(input, start + 1, close, depth + 1)?;
    Ok(LexItem::group(items, Span::new(start, close + 1)))
}

// `input[start]` is `(`. Quoted spans are skipped so a `)` inside a string
// does not close the group.
fn find_matching_paren(input: &str, start: usize, end: usize) -> Result<usize, LexError> {
    let mut depth = 0usize;
    let mut open_quote: Option<(char, usize)> = None;

    for (i, c) in input[start..end].char_indices() {
        let offset = start + i;
        match open_quote {
            Some((quote, _)) => {
                if c == quote {
                    open_quote = None;
                }
            }
            None if is_quote(c) => open_quote = Some((c, offset)),
            None if c == '(' => depth += 1,
            None if c == ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(offset);
                }
            }
            None => {}
        }
    }

    match open_quote {
        Some((_, quote_start)) => {
            let span = Span::new(quote_start, end);
            Err(LexError::UnclosedString(span.string_from_source(input), span))
        }
        None => {
            let span = Span::new(start, end);
            Err(LexError::UnclosedGroup(span.string_from_source(input), span))
        }
    }
}

fn lex_operator(input: &str, start: usize, end: usize) -> Option<LexItem> {
    let rest = &input[start..end];
    // longest match first
    for len in [2, 1] {
        let Some(candidate) = rest.get(..len) else {
            continue;
        };
        if let Some(token) = OPERATORS.get(candidate) {
            return Some(LexItem::text(
                *token,
                candidate,
                Span::new(start, start + len),
            ));
        }
    }
    None
}

fn lex_keyword(input: &str, start: usize, end: usize) -> Result<LexItem, LexError> {
    let rest = &input[start..end];
    if let Some((keyword, token)) = KEYWORDS.entries().find(|(kw, _)| rest.starts_with(**kw)) {
        return Ok(LexItem::text(
            *token,
            *keyword,
            Span::new(start, start + keyword.len()),
        ));
    }

    let stop = scan_while(input, start, end, |c| !c.is_whitespace());
    let span = Span::new(start, stop);
    Err(LexError::UnknownToken(span.string_from_source(input), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).unwrap().iter().map(LexItem::token).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        lex(input)
            .unwrap()
            .iter()
            .map(|li| li.as_text().unwrap().to_string())
            .collect()
    }

    #[test]
    fn lexes_literals() {
        assert_eq!(
            tokens("42 'a' \"b\" true false null $x_1"),
            vec![
                Token::Integer,
                Token::String,
                Token::String,
                Token::Bool,
                Token::Bool,
                Token::Null,
                Token::Variable,
            ]
        );
        assert_eq!(
            texts("0042 'a b' \"it's\" $x_1"),
            vec!["0042", "a b", "it's", "$x_1"]
        );
    }

    #[test]
    fn two_char_operators_win_over_prefixes() {
        assert_eq!(
            tokens("< <= > >= == != && ||"),
            vec![
                Token::Lt,
                Token::Lte,
                Token::Gt,
                Token::Gte,
                Token::Equals,
                Token::NotEquals,
                Token::And,
                Token::Or,
            ]
        );
        assert_eq!(tokens("1<=2"), vec![Token::Integer, Token::Lte, Token::Integer]);
    }

    #[test]
    fn operators_need_no_whitespace() {
        assert_eq!(
            texts("$a==5&&$b!='x'"),
            vec!["$a", "==", "5", "&&", "$b", "!=", "x"]
        );
    }

    #[test]
    fn string_keeps_raw_content() {
        let items = lex(r#"'a\'"#).unwrap();
        assert_eq!(items[0].as_text(), Some(r"a\"));
        assert_eq!(items[0].span(), Span::new(0, 4));
    }

    #[test]
    fn groups_nest() {
        let items = lex("(1 == (2)) && $a").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].token(), Token::Group);
        assert_eq!(items[0].span(), Span::new(0, 10));

        let inner = items[0].as_group().unwrap();
        assert_eq!(inner.len(), 3);
        assert_eq!(inner[0].span(), Span::new(1, 2));
        let innermost = inner[2].as_group().unwrap();
        assert_eq!(innermost[0].as_text(), Some("2"));
        assert_eq!(innermost[0].span(), Span::new(7, 8));
    }

    #[test]
    fn close_paren_inside_string_does_not_close_group() {
        let items = lex("(')' == $a)").unwrap();
        assert_eq!(items.len(), 1);
        let inner = items[0].as_group().unwrap();
        assert_eq!(inner[0].as_text(), Some(")"));
        assert_eq!(inner[2].as_text(), Some("$a"));
    }

    #[test]
    fn empty_group_lexes() {
        let items = lex("()").unwrap();
        assert_eq!(items[0].as_group(), Some(&[][..]));
    }

    #[test]
    fn keywords_match_by_prefix() {
        assert_eq!(tokens("truefalse"), vec![Token::Bool, Token::Bool]);
        assert_eq!(
            lex("truex"),
            Err(LexError::UnknownToken("x".to_string(), Span::new(4, 5)))
        );
    }

    #[test]
    fn rejects_unknown_text() {
        assert_eq!(
            lex("@"),
            Err(LexError::UnknownToken("@".to_string(), Span::new(0, 1)))
        );
        assert_eq!(
            lex("$a == foo"),
            Err(LexError::UnknownToken("foo".to_string(), Span::new(6, 9)))
        );
        assert!(matches!(lex("1 = 1"), Err(LexError::UnknownToken(..))));
        assert!(matches!(lex("1 & 1"), Err(LexError::UnknownToken(..))));
        assert!(matches!(lex("!true"), Err(LexError::UnknownToken(..))));
        assert!(matches!(lex("-1"), Err(LexError::UnknownToken(..))));
    }

    #[test]
    fn rejects_unclosed_string() {
        assert_eq!(
            lex("'unterminated"),
            Err(LexError::UnclosedString(
                "'unterminated".to_string(),
                Span::new(0, 13)
            ))
        );
        // quote kinds must match
        assert!(matches!(lex("'abc\""), Err(LexError::UnclosedString(..))));
        assert!(matches!(lex("('abc)"), Err(LexError::UnclosedString(..))));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(
            lex("(1 == 1"),
            Err(LexError::UnclosedGroup("(1 == 1".to_string(), Span::new(0, 7)))
        );
        assert_eq!(
            lex("1 == ((1)"),
            Err(LexError::UnclosedGroup("((1)".to_string(), Span::new(5, 9)))
        );
        assert_eq!(
            lex("1)"),
            Err(LexError::UnexpectedCloseParen(")".to_string(), Span::new(1, 2)))
        );
    }

    #[test]
    fn rejects_empty_variable() {
        assert_eq!(
            lex("$ == 1"),
            Err(LexError::EmptyVariable("$".to_string(), Span::new(0, 1)))
        );
    }

    fn nested(depth: usize) -> String {
        format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn accepts_nesting_up_to_the_limit() {
        let items = lex(&nested(MAX_GROUP_DEPTH)).unwrap();
        let mut level = &items[..];
        for _ in 0..MAX_GROUP_DEPTH {
            level = level[0].as_group().unwrap();
        }
        assert_eq!(level[0].as_text(), Some("1"));
    }

    #[test]
    fn rejects_nesting_past_the_limit() {
        let limit = MAX_GROUP_DEPTH;
        assert_eq!(
            lex(&nested(limit + 1)),
            Err(LexError::TooDeep(limit, Span::new(limit, limit + 1)))
        );
        assert!(matches!(lex(&nested(10_000)), Err(LexError::TooDeep(..))));
        assert!(matches!(
            lex(&"(".repeat(10_000)),
            Err(LexError::UnclosedGroup(..))
        ));
    }

    #[test]
    fn skips_whitespace() {
        assert!(lex(" \t\n ").unwrap().is_empty());
        assert_eq!(tokens("\t1\n"), vec![Token::Integer]);
    }
}
