//! In-process document store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use super::backend::DocumentStore;
use super::StoreError;
use crate::types::{Document, DocumentPredicate, NewDocument};

/// Document store held in memory, in insertion order.
///
/// Fetches and removals can be switched to fail, which lets callers exercise
/// their recovery paths without a broken database.
#[derive(Default)]
pub struct MemoryStore {
  docs: RwLock<Vec<Document>>,
  fail_fetches: AtomicBool,
  fail_removes: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a store holding `docs` in the given order.
  pub fn with_documents(docs: Vec<Document>) -> Self {
    Self {
      docs: RwLock::new(docs),
      ..Default::default()
    }
  }

  pub fn fail_fetches(&self, fail: bool) {
    self.fail_fetches.store(fail, Ordering::SeqCst);
  }

  pub fn fail_removes(&self, fail: bool) {
    self.fail_removes.store(fail, Ordering::SeqCst);
  }

  fn check_fetch(&self) -> Result<(), StoreError> {
    if self.fail_fetches.load(Ordering::SeqCst) {
      return Err(StoreError::Unavailable("fetch rejected".into()));
    }
    Ok(())
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  async fn init_schema(&self) -> Result<(), StoreError> {
    Ok(())
  }

  async fn insert(&self, doc: NewDocument) -> Result<Document, StoreError> {
    let doc = doc.into_document(Uuid::new_v4());
    self.docs.write().push(doc.clone());
    Ok(doc)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Document>, StoreError> {
    self.check_fetch()?;
    Ok(self.docs.read().iter().find(|d| d.id == id).cloned())
  }

  async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
    self.check_fetch()?;
    Ok(self.docs.read().clone())
  }

  async fn fetch_matching(
    &self,
    predicate: &DocumentPredicate,
  ) -> Result<Vec<Document>, StoreError> {
    self.check_fetch()?;
    Ok(
      self
        .docs
        .read()
        .iter()
        .filter(|d| predicate.matches(d))
        .cloned()
        .collect(),
    )
  }

  async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
    if self.fail_removes.load(Ordering::SeqCst) {
      return Err(StoreError::Unavailable("remove rejected".into()));
    }
    let mut docs = self.docs.write();
    let pos = docs
      .iter()
      .position(|d| d.id == id)
      .ok_or(StoreError::NotFound(id))?;
    docs.remove(pos);
    Ok(())
  }

  async fn count(&self) -> Result<usize, StoreError> {
    self.check_fetch()?;
    Ok(self.docs.read().len())
  }
}
