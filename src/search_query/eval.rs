use super::parser::SearchFilter;
use super::token::{CompareOp, Field};
use crate::message::{Message, RecipientKind};

pub fn eval(filter: &SearchFilter, message: &Message) -> bool {
    match filter {
        SearchFilter::Term { field, op, value } => eval_term(*field, *op, value, message),
        SearchFilter::And(a, b) => eval(a, message) && eval(b, message),
        SearchFilter::Or(a, b) => eval(a, message) || eval(b, message),
        SearchFilter::Not(inner) => !eval(inner, message),
    }
}

fn eval_term(field: Field, op: CompareOp, value: &str, msg: &Message) -> bool {
    let found = field_contains(field, &value.to_lowercase(), msg);
    match op {
        CompareOp::Eq | CompareOp::Colon => found,
        CompareOp::NotEq => !found,
    }
}

/// Case-insensitive substring match; `needle` is already lowercase.
fn field_contains(field: Field, needle: &str, msg: &Message) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    let recipient = |kind: RecipientKind| {
        msg.recipients_of(kind)
            .any(|r| contains(&r.name) || contains(&r.email))
    };
    match field {
        Field::Subject => contains(&msg.subject),
        Field::Body => contains(&msg.body),
        Field::Sender => contains(&msg.sender_name) || contains(&msg.sender_email),
        Field::To => recipient(RecipientKind::To),
        Field::Cc => recipient(RecipientKind::Cc),
        Field::Bcc => recipient(RecipientKind::Bcc),
        Field::Category => msg.categories.iter().any(|c| contains(c)),
        Field::Attachment => msg.attachments.iter().any(|a| contains(a)),
    }
}
