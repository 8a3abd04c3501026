use std::fmt;

use serde::{Deserialize, Serialize};

/// Message fields a query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Subject,
    Sender,
    Body,
    To,
    Cc,
    Bcc,
    Category,
    Attachment,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Subject,
        Field::Sender,
        Field::Body,
        Field::To,
        Field::Cc,
        Field::Bcc,
        Field::Category,
        Field::Attachment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::Sender => "sender",
            Field::Body => "body",
            Field::To => "to",
            Field::Cc => "cc",
            Field::Bcc => "bcc",
            Field::Category => "category",
            Field::Attachment => "attachment",
        }
    }

    /// Case-insensitive lookup of a field name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ":")]
    Colon,
    #[serde(rename = "<>")]
    NotEq,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Colon => ":",
            CompareOp::NotEq => "<>",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paren {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOp {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub key: Field,
    pub op: CompareOp,
    pub val: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub negate: bool,
}

impl Expression {
    pub fn new(key: Field, op: CompareOp, val: impl Into<String>) -> Self {
        Self {
            key,
            op,
            val: val.into(),
            negate: false,
        }
    }
}

/// A parenthesized group. `tokens` is always in normalized form once it
/// leaves the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subquery {
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub negate: bool,
}

impl Subquery {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            negate: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Token {
    #[serde(rename = "EOF")]
    Eof,
    Parenthesis(Paren),
    Operator(BoolOp),
    Expression(Expression),
    Subquery(Subquery),
}

impl Token {
    /// Expressions and subqueries are the operands of a connective.
    pub fn is_term(&self) -> bool {
        matches!(self, Token::Expression(_) | Token::Subquery(_))
    }

    /// `AND` or `OR`.
    pub fn is_connective(&self) -> bool {
        matches!(self, Token::Operator(BoolOp::And | BoolOp::Or))
    }

    pub fn is_negated(&self) -> bool {
        match self {
            Token::Expression(expr) => expr.negate,
            Token::Subquery(sub) => sub.negate,
            _ => false,
        }
    }

    /// Marks a term as negated. Other tokens are returned as is.
    pub fn negated(mut self) -> Self {
        match &mut self {
            Token::Expression(expr) => expr.negate = true,
            Token::Subquery(sub) => sub.negate = true,
            _ => {}
        }
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.is_negated() { "NOT " } else { "" };
        match self {
            Token::Eof => f.write_str("<eof>"),
            Token::Parenthesis(Paren::Open) => f.write_str("("),
            Token::Parenthesis(Paren::Close) => f.write_str(")"),
            Token::Operator(BoolOp::And) => f.write_str("AND"),
            Token::Operator(BoolOp::Or) => f.write_str("OR"),
            Token::Operator(BoolOp::Not) => f.write_str("NOT"),
            Token::Expression(expr) => write!(f, "{not}{}{}{}", expr.key, expr.op, expr.val),
            Token::Subquery(sub) => {
                write!(f, "{not}(")?;
                for (idx, tok) in sub.tokens.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{tok}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
