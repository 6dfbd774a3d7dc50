use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::params;
use rusqlite::types::Type;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use super::backend::DocumentStore;
use super::StoreError;
use crate::types::{contains_ignore_case, Document, DocumentPredicate, NewDocument};

const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA temp_store = MEMORY;
"#;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    name TEXT,
    content TEXT,
    modified_date TEXT,
    size INTEGER NOT NULL CHECK (size >= 0)
);
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, content, modified_date, size FROM documents";

pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  pub async fn new(path: &str) -> Result<Self, StoreError> {
    let conn = if path == ":memory:" {
      Connection::open_in_memory().await?
    } else {
      Connection::open(path).await?
    };

    conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        // Same case folding as the in-process matcher so both fetch paths agree
        conn.create_scalar_function(
          "contains_ci",
          2,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| {
            let haystack: Option<String> = ctx.get(0)?;
            let needle: String = ctx.get(1)?;
            Ok(haystack.is_some_and(|h| contains_ignore_case(&h, &needle)))
          },
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!("Opened SQLite document store at {}", path);
    Ok(Self { conn })
  }

  pub async fn in_memory() -> Result<Self, StoreError> {
    Self::new(":memory:").await
  }
}

#[async_trait]
impl DocumentStore for SqliteStore {
  async fn init_schema(&self) -> Result<(), StoreError> {
    self
      .conn
      .call(|conn| conn.execute_batch(SCHEMA).map_err(|e| e.into()))
      .await?;
    tracing::info!("SQLite schema initialized");
    Ok(())
  }

  async fn insert(&self, doc: NewDocument) -> Result<Document, StoreError> {
    let size = i64::try_from(doc.size)
      .map_err(|_| StoreError::InvalidRecord(format!("size {} out of range", doc.size)))?;

    let id = Uuid::new_v4();
    let id_str = id.to_string();
    let name = doc.name.clone();
    let content = doc.content.clone();
    let modified = doc.modified_date.map(|d| d.to_rfc3339());

    self
      .conn
      .call(move |conn| {
        conn
          .execute(
            "INSERT INTO documents (id, name, content, modified_date, size) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id_str, name, content, modified, size],
          )
          .map_err(|e| e.into())
      })
      .await?;

    Ok(doc.into_document(id))
  }

  async fn get(&self, id: Uuid) -> Result<Option<Document>, StoreError> {
    let id_str = id.to_string();

    let doc = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let mut rows = stmt.query(params![id_str])?;
        if let Some(row) = rows.next()? {
          Ok(Some(row_to_doc(row)?))
        } else {
          Ok(None)
        }
      })
      .await?;
    Ok(doc)
  }

  async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
    let docs = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare_cached(&format!("{} ORDER BY rowid", SELECT_COLUMNS))?;
        let mut rows = stmt.query([])?;
        let mut docs = Vec::new();
        while let Some(row) = rows.next()? {
          docs.push(row_to_doc(row)?);
        }
        Ok(docs)
      })
      .await?;
    Ok(docs)
  }

  async fn fetch_matching(
    &self,
    predicate: &DocumentPredicate,
  ) -> Result<Vec<Document>, StoreError> {
    let sql = match predicate {
      DocumentPredicate::NameOrContentContains(_) => format!(
        "{} WHERE contains_ci(name, ?1) OR contains_ci(content, ?1) ORDER BY rowid",
        SELECT_COLUMNS
      ),
    };
    let needle = predicate.term().to_owned();

    let docs = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(&sql)?;
        let mut rows = stmt.query(params![needle])?;
        let mut docs = Vec::new();
        while let Some(row) = rows.next()? {
          docs.push(row_to_doc(row)?);
        }
        Ok(docs)
      })
      .await?;
    Ok(docs)
  }

  async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
    let id_str = id.to_string();
    let changed: usize = self
      .conn
      .call(move |conn| {
        conn
          .execute("DELETE FROM documents WHERE id = ?1", params![id_str])
          .map_err(|e| e.into())
      })
      .await?;

    if changed == 0 {
      return Err(StoreError::NotFound(id));
    }
    Ok(())
  }

  async fn count(&self) -> Result<usize, StoreError> {
    let count: i64 = self
      .conn
      .call(|conn| {
        conn
          .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
          .map_err(|e| e.into())
      })
      .await?;
    Ok(count as usize)
  }
}

#[inline]
fn row_to_doc(row: &rusqlite::Row) -> Result<Document, rusqlite::Error> {
  let id_str: String = row.get(0)?;
  let modified_str: Option<String> = row.get(3)?;
  let size: i64 = row.get(4)?;

  let id = id_str
    .parse::<Uuid>()
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
  let modified_date = modified_str
    .map(|s| {
      DateTime::parse_from_rfc3339(&s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))
    })
    .transpose()?;
  let size = u64::try_from(size)
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))?;

  Ok(Document {
    id,
    name: row.get(1)?,
    content: row.get(2)?,
    modified_date,
    size,
  })
}
