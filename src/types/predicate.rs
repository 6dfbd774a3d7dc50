use serde::{Deserialize, Serialize};

use super::Document;

/// Predicate a store evaluates in `fetch_matching`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "term", rename_all = "snake_case")]
pub enum DocumentPredicate {
  /// `name` or `content` contains the term, ignoring case. Absent fields never match.
  NameOrContentContains(String),
}

impl DocumentPredicate {
  pub fn name_or_content_contains(term: impl Into<String>) -> Self {
    Self::NameOrContentContains(term.into())
  }

  pub fn term(&self) -> &str {
    match self {
      Self::NameOrContentContains(term) => term,
    }
  }

  pub fn matches(&self, doc: &Document) -> bool {
    match self {
      Self::NameOrContentContains(term) => {
        field_contains(doc.name.as_deref(), term) || field_contains(doc.content.as_deref(), term)
      }
    }
  }
}

/// Case-insensitive substring test, folding both sides with Unicode lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
  field.is_some_and(|value| contains_ignore_case(value, needle))
}
