use super::token::{BoolOp, Paren, Subquery, Token};

/// Normalize a token stream into alternating `term, connective, term, ...`
/// form with every parenthesized group folded into a [`Subquery`]. Never
/// fails: anything that cannot be placed is dropped.
pub fn normalize(tokens: Vec<Token>) -> Vec<Token> {
    let tokens = fold_groups(tokens);
    resolve(tokens)
}

/// Applies the flat passes to one level whose groups are already folded.
fn resolve(tokens: Vec<Token>) -> Vec<Token> {
    let tokens = fold_negation(tokens);
    let tokens = insert_implicit_and(tokens);
    trim_operators(tokens)
}

/// Replace every matched `( ... )` span with a `Subquery` holding the
/// resolved content. Inner groups close first, so a parent only ever sees
/// finished subqueries.
///
/// - unmatched `)` is dropped
/// - an unclosed `(` is dropped and its content stays in the enclosing level
/// - groups that resolve to nothing are dropped, together with the `NOT`
///   run in front of them
fn fold_groups(tokens: Vec<Token>) -> Vec<Token> {
    let mut top: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut open: Vec<Vec<Token>> = Vec::new();

    for tok in tokens {
        let folded = match tok {
            Token::Parenthesis(Paren::Open) => {
                open.push(Vec::new());
                continue;
            }
            Token::Parenthesis(Paren::Close) => match open.pop() {
                Some(inner) => into_subquery(resolve(inner), false),
                None => continue,
            },
            Token::Subquery(sub) => into_subquery(normalize(sub.tokens), sub.negate),
            Token::Eof => continue,
            other => Some(other),
        };
        let level = open.last_mut().unwrap_or(&mut top);
        match folded {
            Some(tok) => level.push(tok),
            // the NOT run before a dropped group has nothing to apply to
            None => {
                while level.last() == Some(&Token::Operator(BoolOp::Not)) {
                    level.pop();
                }
            }
        }
    }

    while let Some(inner) = open.pop() {
        open.last_mut().unwrap_or(&mut top).extend(inner);
    }

    top
}

fn into_subquery(tokens: Vec<Token>, negate: bool) -> Option<Token> {
    if tokens.is_empty() {
        return None;
    }
    Some(Token::Subquery(Subquery { tokens, negate }))
}

/// Fold runs of `NOT` into the `negate` flag of the following term. An odd
/// run sets the flag, an even run leaves the term as it is. A run that is
/// not directly followed by a term is discarded.
fn fold_negation(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut odd = false;
    for tok in tokens {
        match tok {
            Token::Operator(BoolOp::Not) => odd = !odd,
            term if term.is_term() => {
                out.push(if odd { term.negated() } else { term });
                odd = false;
            }
            other => {
                odd = false;
                out.push(other);
            }
        }
    }
    out
}

/// `term term` → `term AND term`.
fn insert_implicit_and(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if tok.is_term() && out.last().is_some_and(Token::is_term) {
            out.push(Token::Operator(BoolOp::And));
        }
        out.push(tok);
    }
    out
}

/// Drop connectives without a term on both sides. Stacked connectives keep
/// the first one: `a AND OR b` → `a AND b`.
fn trim_operators(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if !tok.is_term() && !out.last().is_some_and(Token::is_term) {
            continue;
        }
        out.push(tok);
    }
    while out.last().is_some_and(|t| !t.is_term()) {
        out.pop();
    }
    out
}
