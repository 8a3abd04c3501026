use thiserror::Error;

use super::token::{BoolOp, CompareOp, Expression, Field, Paren, Token};

/// The input cannot be expressed as a KQL query. Callers should treat it as
/// free-text search input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognized word {word:?} at position {position}")]
    UnknownWord { word: String, position: usize },

    #[error("missing value for {key} at position {position}")]
    MissingValue { key: Field, position: usize },
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        match chars[i] {
            c if c.is_whitespace() => {
                i += 1;
            }
            '(' => {
                tokens.push(Token::Parenthesis(Paren::Open));
                i += 1;
            }
            ')' => {
                tokens.push(Token::Parenthesis(Paren::Close));
                i += 1;
            }
            _ => {
                let start = i;
                if let Some((key, op)) = read_key(&chars, &mut i) {
                    let val = read_value(&chars, &mut i);
                    if val.is_empty() {
                        return Err(LexError::MissingValue {
                            key,
                            position: start,
                        });
                    }
                    tokens.push(Token::Expression(Expression::new(key, op, val)));
                    continue;
                }

                let word = read_word(&chars, &mut i);
                match word.as_str() {
                    "AND" => tokens.push(Token::Operator(BoolOp::And)),
                    "OR" => tokens.push(Token::Operator(BoolOp::Or)),
                    "NOT" => tokens.push(Token::Operator(BoolOp::Not)),
                    _ => {
                        return Err(LexError::UnknownWord {
                            word,
                            position: start,
                        })
                    }
                }
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

/// Reads `field` followed by a comparison operator. Leaves `i` untouched
/// when the input at `i` is not a key.
fn read_key(chars: &[char], i: &mut usize) -> Option<(Field, CompareOp)> {
    let mut end = *i;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        end += 1;
    }
    let name: String = chars[*i..end].iter().collect();
    let key = Field::from_name(&name)?;

    let (op, width) = match (chars.get(end), chars.get(end + 1)) {
        (Some('<'), Some('>')) => (CompareOp::NotEq, 2),
        (Some('='), _) => (CompareOp::Eq, 1),
        (Some(':'), _) => (CompareOp::Colon, 1),
        _ => return None,
    };

    *i = end + width;
    Some((key, op))
}

fn read_value(chars: &[char], i: &mut usize) -> String {
    let mut value = String::new();
    while *i < chars.len() {
        match chars[*i] {
            c if c.is_whitespace() => break,
            ')' => break,
            c => {
                value.push(c);
                *i += 1;
            }
        }
    }
    value
}

fn read_word(chars: &[char], i: &mut usize) -> String {
    let mut word = String::new();
    while *i < chars.len() {
        match chars[*i] {
            c if c.is_whitespace() => break,
            '(' | ')' => break,
            c => {
                word.push(c);
                *i += 1;
            }
        }
    }
    word
}
