use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored document record. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub id: Uuid,
  pub name: Option<String>,
  pub content: Option<String>,
  pub modified_date: Option<DateTime<Utc>>,
  pub size: u64,
}

impl Document {
  /// Name used for ordering; an absent name sorts as the empty string.
  pub fn sort_name(&self) -> &str {
    self.name.as_deref().unwrap_or("")
  }
}

/// Insert payload for a document. The store assigns the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
  pub name: Option<String>,
  pub content: Option<String>,
  pub modified_date: Option<DateTime<Utc>>,
  pub size: u64,
}

impl NewDocument {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Default::default()
    }
  }

  pub fn with_content(mut self, content: impl Into<String>) -> Self {
    let content = content.into();
    self.size = content.len() as u64;
    self.content = Some(content);
    self
  }

  pub fn modified_at(mut self, at: DateTime<Utc>) -> Self {
    self.modified_date = Some(at);
    self
  }

  pub fn with_size(mut self, size: u64) -> Self {
    self.size = size;
    self
  }

  pub(crate) fn into_document(self, id: Uuid) -> Document {
    Document {
      id,
      name: self.name,
      content: self.content,
      modified_date: self.modified_date,
      size: self.size,
    }
  }
}
