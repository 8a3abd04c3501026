use super::normalize::normalize;
use super::token::{BoolOp, CompareOp, Field, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    Term {
        field: Field,
        op: CompareOp,
        value: String,
    },
    And(Box<SearchFilter>, Box<SearchFilter>),
    Or(Box<SearchFilter>, Box<SearchFilter>),
    Not(Box<SearchFilter>),
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// or_expr = and_expr ("OR" and_expr)*
    fn parse_or(&mut self) -> Option<SearchFilter> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Operator(BoolOp::Or))) {
            self.advance();
            let Some(right) = self.parse_and() else {
                break;
            };
            left = SearchFilter::Or(Box::new(left), Box::new(right));
        }
        Some(left)
    }

    /// and_expr = term ("AND" term)*
    fn parse_and(&mut self) -> Option<SearchFilter> {
        let mut left = self.parse_term()?;
        while matches!(self.peek(), Some(Token::Operator(BoolOp::And))) {
            self.advance();
            let Some(right) = self.parse_term() else {
                break;
            };
            left = SearchFilter::And(Box::new(left), Box::new(right));
        }
        Some(left)
    }

    /// term = expression | subquery, each optionally negated
    fn parse_term(&mut self) -> Option<SearchFilter> {
        let (filter, negate) = match self.advance()? {
            Token::Expression(expr) => (
                SearchFilter::Term {
                    field: expr.key,
                    op: expr.op,
                    value: expr.val.clone(),
                },
                expr.negate,
            ),
            Token::Subquery(sub) => (Parser::new(&sub.tokens).parse_or()?, sub.negate),
            _ => return None,
        };
        if negate {
            return Some(SearchFilter::Not(Box::new(filter)));
        }
        Some(filter)
    }
}

/// Build a filter tree from any token stream. The stream is normalized
/// first, so this cannot fail; `None` means the stream held no terms.
pub fn build_filter(tokens: Vec<Token>) -> Option<SearchFilter> {
    let tokens = normalize(tokens);
    Parser::new(&tokens).parse_or()
}
