mod backend;
mod error;
mod memory;
mod sqlite;

use std::sync::Arc;

pub use backend::{BackendType, DocumentStore};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::config::BrowserConfig;

/// Open the store selected by `config` and make sure its schema exists.
pub async fn open_store(config: &BrowserConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
  let store: Arc<dyn DocumentStore> = match config.store.backend {
    BackendType::Sqlite => Arc::new(SqliteStore::new(&config.store.path).await?),
    BackendType::Memory => Arc::new(MemoryStore::new()),
  };
  store.init_schema().await?;
  Ok(store)
}
