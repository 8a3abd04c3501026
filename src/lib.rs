//! Parser for KQL, the keyword query language of the mail search box:
//! `subject=report AND (sender=anna OR sender=bob) NOT category=spam`.

pub mod message;
pub mod search_query;

pub use message::{Message, Recipient, RecipientKind};
pub use search_query::{is_kql_query, normalize, tokenize};
