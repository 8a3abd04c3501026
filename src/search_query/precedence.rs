use super::normalize::normalize;
use super::token::{BoolOp, Subquery, Token};

/// Normalize `tokens` and make AND bind tighter than OR by moving every
/// AND-run of a mixed level into its own subquery:
///
/// `a OR b AND c OR d` → `a OR (b AND c) OR d`
///
/// Afterwards each level uses a single connective, so a consumer can treat
/// a level as one n-ary AND or OR.
pub fn group_conjunctions(tokens: Vec<Token>) -> Vec<Token> {
    group_level(normalize(tokens))
}

/// `tokens` must already be normalized.
fn group_level(tokens: Vec<Token>) -> Vec<Token> {
    let tokens: Vec<Token> = tokens
        .into_iter()
        .map(|tok| match tok {
            Token::Subquery(sub) => Token::Subquery(Subquery {
                tokens: group_level(sub.tokens),
                negate: sub.negate,
            }),
            other => other,
        })
        .collect();

    let has_or = tokens.iter().any(|t| *t == Token::Operator(BoolOp::Or));
    let has_and = tokens.iter().any(|t| *t == Token::Operator(BoolOp::And));
    if !(has_or && has_and) {
        return tokens;
    }

    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token> = Vec::new();
    for tok in tokens {
        if tok == Token::Operator(BoolOp::Or) {
            out.push(close_run(std::mem::take(&mut run)));
            out.push(tok);
        } else {
            run.push(tok);
        }
    }
    out.push(close_run(run));
    out
}

/// A single term stays as it is, a longer AND-run becomes a subquery.
fn close_run(mut run: Vec<Token>) -> Token {
    if run.len() == 1 {
        if let Some(term) = run.pop() {
            return term;
        }
    }
    Token::Subquery(Subquery::new(run))
}
