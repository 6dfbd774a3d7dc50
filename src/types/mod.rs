mod document;
mod predicate;

pub use document::{Document, NewDocument};
pub(crate) use predicate::contains_ignore_case;
pub use predicate::DocumentPredicate;
