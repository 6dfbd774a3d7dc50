//! Import text files from a directory as documents.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::DocumentStore;
use crate::types::{Document, NewDocument};

const PATTERNS: [&str; 2] = ["*.txt", "*.md"];

/// Files in `dir` that the importer picks up, sorted by path.
pub fn importable_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
  let escaped = glob::Pattern::escape(&dir.as_ref().to_string_lossy());
  let mut paths = Vec::new();
  for pattern in PATTERNS {
    let full = format!("{}/{}", escaped, pattern);
    for entry in glob(&full).context("Failed to read glob pattern")? {
      paths.push(entry.context("Failed to read directory entry")?);
    }
  }
  paths.sort();
  Ok(paths)
}

/// Insert one document per non-empty `.txt` / `.md` file in `dir`.
///
/// Every file is read before the first insert, so an unreadable or
/// non-UTF-8 file aborts the import without storing anything.
pub async fn import_directory(
  store: &dyn DocumentStore,
  dir: impl AsRef<Path>,
) -> Result<Vec<Document>> {
  let dir = dir.as_ref();
  let paths = importable_files(dir)?;
  if paths.is_empty() {
    tracing::warn!("No documents found in '{}'", dir.display());
    return Ok(Vec::new());
  }

  tracing::info!("Found {} files to import", paths.len());
  let mut pending = Vec::with_capacity(paths.len());
  for path in &paths {
    if let Some(doc) = read_document(path)? {
      pending.push(doc);
    }
  }

  let mut imported = Vec::with_capacity(pending.len());
  for doc in pending {
    let name = doc.name.clone().unwrap_or_default();
    let doc = store
      .insert(doc)
      .await
      .with_context(|| format!("Failed to store document for {name:?}"))?;
    imported.push(doc);
  }

  tracing::info!("Imported {} documents", imported.len());
  Ok(imported)
}

/// Read one file into a [`NewDocument`]; `None` for blank files.
fn read_document(path: &Path) -> Result<Option<NewDocument>> {
  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path:?}"))?;
  if content.trim().is_empty() {
    tracing::warn!("Skipping empty file: {path:?}");
    return Ok(None);
  }

  let metadata = fs::metadata(path).with_context(|| format!("Failed to stat file: {path:?}"))?;
  let name = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default();

  Ok(Some(NewDocument {
    name: Some(name),
    content: Some(content),
    modified_date: metadata.modified().ok().map(DateTime::<Utc>::from),
    size: metadata.len(),
  }))
}
