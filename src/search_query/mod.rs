mod eval;
mod lexer;
mod normalize;
mod parser;
mod precedence;
mod token;

use crate::message::Message;

pub use eval::eval;
pub use lexer::{tokenize, LexError};
pub use normalize::normalize;
pub use parser::{build_filter, SearchFilter};
pub use precedence::group_conjunctions;
pub use token::{BoolOp, CompareOp, Expression, Field, Paren, Subquery, Token};

/// Whether `input` should be handled as a structured query rather than
/// plain free-text search.
///
/// Requires the whole input to tokenize and at least one `key=value`
/// expression. Bare operators such as `NOT` or `OR` alone do not count.
pub fn is_kql_query(input: &str) -> bool {
    match tokenize(input) {
        Ok(tokens) => tokens.iter().any(|t| matches!(t, Token::Expression(_))),
        Err(err) => {
            log::trace!("not a kql query: {err}");
            false
        }
    }
}

/// Tolerant parse: tokenize, normalize and build a filter tree.
/// Returns `None` when the input is not KQL or holds no terms.
pub fn parse(input: &str) -> Option<SearchFilter> {
    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(err) => {
            log::trace!("not a kql query: {err}");
            return None;
        }
    };
    let filter = build_filter(tokens);
    log::debug!("parsed {input:?} into {filter:?}");
    filter
}

/// Convenience: parse + evaluate in one call.
/// Returns `None` if the query is not KQL.
pub fn matches(query: &str, message: &Message) -> Option<bool> {
    let filter = parse(query)?;
    Some(eval(&filter, message))
}
