use uuid::Uuid;

/// Failure reported by a [`DocumentStore`](super::DocumentStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),
  #[error("sqlite connection error: {0}")]
  Connection(#[from] tokio_rusqlite::Error),
  #[error("document {0} not found")]
  NotFound(Uuid),
  #[error("invalid document record: {0}")]
  InvalidRecord(String),
  #[error("store unavailable: {0}")]
  Unavailable(String),
}
