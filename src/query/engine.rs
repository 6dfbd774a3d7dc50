use crate::db::DocumentStore;
use crate::error::BrowserError;
use crate::types::{Document, DocumentPredicate};

/// Search, filter and ordering policy for the document list.
///
/// An empty term selects every document. A non-empty term keeps documents
/// whose `name` or `content` contains it, ignoring case. Either way the
/// result is ordered by name, stably, so equal names keep the input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentQueryService;

impl DocumentQueryService {
  pub fn new() -> Self {
    Self
  }

  pub fn query<I>(&self, term: &str, documents: I) -> Vec<Document>
  where
    I: IntoIterator<Item = Document>,
  {
    let mut docs: Vec<Document> = if term.is_empty() {
      documents.into_iter().collect()
    } else {
      let predicate = DocumentPredicate::name_or_content_contains(term);
      documents
        .into_iter()
        .filter(|d| predicate.matches(d))
        .collect()
    };
    sort_by_name(&mut docs);
    docs
  }

  /// Fetch from `store` and apply [`query`](Self::query).
  ///
  /// Non-empty terms are pushed down to the store as a predicate; the result
  /// is filtered again here so a store with a looser predicate cannot leak
  /// non-matching rows.
  pub async fn fetch(
    &self,
    store: &dyn DocumentStore,
    term: &str,
  ) -> Result<Vec<Document>, BrowserError> {
    let fetched = if term.is_empty() {
      store.fetch_all().await
    } else {
      store
        .fetch_matching(&DocumentPredicate::name_or_content_contains(term))
        .await
    }
    .map_err(BrowserError::Fetch)?;

    let docs = self.query(term, fetched);
    tracing::debug!(term, results = docs.len(), "Document query");
    Ok(docs)
  }
}

/// Stable ascending sort by name; absent names sort as the empty string.
pub fn sort_by_name(docs: &mut [Document]) {
  docs.sort_by(|a, b| a.sort_name().cmp(b.sort_name()));
}
