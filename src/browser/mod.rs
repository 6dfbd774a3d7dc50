//! Stateful document list: the active search term and the single view
//! derived from it.

mod row;

use std::sync::Arc;

pub use row::{DocumentRow, RowFormatter};

use crate::db::DocumentStore;
use crate::error::BrowserError;
use crate::query::DocumentQueryService;
use crate::types::Document;

pub struct DocumentBrowser {
  store: Arc<dyn DocumentStore>,
  service: DocumentQueryService,
  formatter: RowFormatter,
  term: String,
  view: Vec<Document>,
}

impl DocumentBrowser {
  /// Create a browser with an empty view. Call [`refresh`](Self::refresh)
  /// to load documents.
  pub fn new(store: Arc<dyn DocumentStore>) -> Self {
    Self {
      store,
      service: DocumentQueryService::new(),
      formatter: RowFormatter::default(),
      term: String::new(),
      view: Vec::new(),
    }
  }

  pub fn with_formatter(mut self, formatter: RowFormatter) -> Self {
    self.formatter = formatter;
    self
  }

  pub fn term(&self) -> &str {
    &self.term
  }

  pub fn is_searching(&self) -> bool {
    !self.term.is_empty()
  }

  pub fn view(&self) -> &[Document] {
    &self.view
  }

  pub fn len(&self) -> usize {
    self.view.len()
  }

  pub fn is_empty(&self) -> bool {
    self.view.is_empty()
  }

  /// Document shown at `row` of the current view.
  pub fn selected(&self, row: usize) -> Option<&Document> {
    self.view.get(row)
  }

  pub fn rows(&self) -> Vec<DocumentRow> {
    self.view.iter().map(|d| self.formatter.row(d)).collect()
  }

  /// Recompute the view for the current term. On failure the previous view
  /// is left untouched.
  pub async fn refresh(&mut self) -> Result<&[Document], BrowserError> {
    let docs = self.service.fetch(self.store.as_ref(), &self.term).await?;
    self.view = docs;
    Ok(self.view.as_slice())
  }

  /// Set the active term and refresh. The term is kept even when the fetch
  /// fails, so the next refresh retries the same search.
  pub async fn search(&mut self, term: impl Into<String>) -> Result<&[Document], BrowserError> {
    self.term = term.into();
    self.refresh().await
  }

  pub async fn clear_search(&mut self) -> Result<&[Document], BrowserError> {
    self.search(String::new()).await
  }

  /// Remove the document at `row` from the store, then from the view.
  ///
  /// The view only changes after the store confirms the removal. When the
  /// store rejects it, the view is reloaded from the store's current state.
  pub async fn delete_at(&mut self, row: usize) -> Result<Document, BrowserError> {
    let len = self.view.len();
    let id = self
      .view
      .get(row)
      .map(|d| d.id)
      .ok_or(BrowserError::NoSuchRow { row, len })?;

    match self.store.remove(id).await {
      Ok(()) => {
        let removed = self.view.remove(row);
        tracing::info!(%id, row, "Deleted document");
        Ok(removed)
      }
      Err(e) => {
        tracing::warn!(%id, error = %e, "Delete failed, reloading list");
        self.resync().await;
        Err(BrowserError::Delete(e))
      }
    }
  }

  /// Delete `doc` at its current position in the view.
  pub async fn delete(&mut self, doc: &Document) -> Result<Document, BrowserError> {
    let row = self
      .view
      .iter()
      .position(|d| d.id == doc.id)
      .ok_or(BrowserError::NotDisplayed(doc.id))?;
    self.delete_at(row).await
  }

  async fn resync(&mut self) {
    match self.service.fetch(self.store.as_ref(), &self.term).await {
      Ok(docs) => self.view = docs,
      Err(e) => tracing::warn!(error = %e, "Reload after failed delete failed, keeping list"),
    }
  }
}
