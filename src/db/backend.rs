use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;
use crate::types::{Document, DocumentPredicate, NewDocument};

/// Which store implementation backs the browser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
  #[default]
  Sqlite,
  Memory,
}

impl std::str::FromStr for BackendType {
  type Err = String;

  /// Accepts the config spellings plus `in-memory` / `in_memory`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "sqlite" => Ok(BackendType::Sqlite),
      "memory" | "in-memory" | "in_memory" => Ok(BackendType::Memory),
      _ => Err(format!("Unknown store backend: {}", s)),
    }
  }
}

impl std::fmt::Display for BackendType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      BackendType::Sqlite => write!(f, "sqlite"),
      BackendType::Memory => write!(f, "memory"),
    }
  }
}

/// Persistent system of record for documents.
///
/// Fetches return documents in store-defined order (insertion order for the
/// bundled stores). Ordering for display is applied by the query service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  async fn init_schema(&self) -> Result<(), StoreError>;

  async fn insert(&self, doc: NewDocument) -> Result<Document, StoreError>;
  async fn get(&self, id: Uuid) -> Result<Option<Document>, StoreError>;
  async fn fetch_all(&self) -> Result<Vec<Document>, StoreError>;
  async fn fetch_matching(
    &self,
    predicate: &DocumentPredicate,
  ) -> Result<Vec<Document>, StoreError>;
  /// Remove a document. Fails with [`StoreError::NotFound`] when absent.
  async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
  async fn count(&self) -> Result<usize, StoreError>;
}
