use uuid::Uuid;

use crate::db::StoreError;

/// Failure surfaced by the document browser. Every variant is recoverable;
/// the front end shows [`notice`](BrowserError::notice) and carries on.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
  #[error("fetch failed: {0}")]
  Fetch(#[source] StoreError),
  #[error("delete failed: {0}")]
  Delete(#[source] StoreError),
  #[error("row {row} out of range ({len} rows displayed)")]
  NoSuchRow { row: usize, len: usize },
  #[error("document {0} is not in the displayed list")]
  NotDisplayed(Uuid),
}

impl BrowserError {
  /// Message shown to the user.
  pub fn notice(&self) -> &'static str {
    match self {
      Self::Fetch(_) => "Fetch for documents could not be performed.",
      Self::Delete(_) => "Delete failed.",
      Self::NoSuchRow { .. } | Self::NotDisplayed(_) => "No such document in the list.",
    }
  }
}
