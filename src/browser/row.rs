use serde::Serialize;
use std::fmt::Write;

use crate::config::default_date_format;
use crate::types::Document;

/// One displayed line of the document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
  pub name: String,
  pub size: String,
  pub modified: String,
}

/// Turns documents into [`DocumentRow`]s.
#[derive(Debug, Clone)]
pub struct RowFormatter {
  date_format: String,
}

impl Default for RowFormatter {
  fn default() -> Self {
    Self::new(default_date_format())
  }
}

impl RowFormatter {
  pub fn new(date_format: impl Into<String>) -> Self {
    Self {
      date_format: date_format.into(),
    }
  }

  pub fn row(&self, doc: &Document) -> DocumentRow {
    DocumentRow {
      name: doc.name.clone().unwrap_or_default(),
      size: format!("{} bytes", doc.size),
      modified: doc
        .modified_date
        .and_then(|d| {
          let mut out = String::new();
          write!(out, "{}", d.format(&self.date_format)).ok()?;
          Some(out)
        })
        .unwrap_or_else(|| "unknown".into()),
    }
  }
}
