use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::path::{Path, PathBuf};

use crate::browser::DocumentBrowser;
use crate::db::{BackendType, DocumentStore};
use crate::error::BrowserError;
use crate::types::Document;

#[derive(Parser)]
#[command(name = "docsearch", about = "Browse and search stored documents", version)]
pub struct CliArgs {
  /// SQLite database file (overrides the config file)
  #[arg(long, env = "DOCSEARCH_SQLITE_PATH")]
  pub sqlite: Option<String>,
  /// Store backend: sqlite or memory (overrides the config file)
  #[arg(long, env = "DOCSEARCH_BACKEND")]
  pub backend: Option<BackendType>,
  #[arg(short, long)]
  pub config: Option<String>,
  #[arg(long)]
  pub log_level: Option<String>,
  #[arg(long, global = true, default_value = "table")]
  pub format: OutputFormat,
  #[command(subcommand)]
  pub subcommand: Option<Commands>,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
  #[default]
  Table,
  Json,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Create the document table
  Init,
  /// Import .txt and .md files from a directory
  Import { dir: PathBuf },
  /// List documents, optionally filtered by a search term
  List {
    #[arg(short, long)]
    search: Option<String>,
  },
  /// Print one document of the list, including its content
  Show {
    /// Row number as shown by `list` (starting at 1)
    row: usize,
    #[arg(short, long)]
    search: Option<String>,
  },
  /// Delete one document of the list
  Delete {
    /// Row number as shown by `list` (starting at 1)
    row: usize,
    #[arg(short, long)]
    search: Option<String>,
  },
}

/// Convert a 1-based row number into a view index.
pub fn row_index(row: usize, len: usize) -> Result<usize, BrowserError> {
  row
    .checked_sub(1)
    .filter(|i| *i < len)
    .ok_or(BrowserError::NoSuchRow { row, len })
}

fn with_notice(e: BrowserError) -> anyhow::Error {
  let notice = e.notice();
  anyhow::Error::new(e).context(notice)
}

pub async fn run_init(store: &dyn DocumentStore) -> Result<(), anyhow::Error> {
  store.init_schema().await?;
  println!("Schema initialized");
  Ok(())
}

pub async fn run_import(store: &dyn DocumentStore, dir: &Path) -> Result<(), anyhow::Error> {
  let imported = crate::import::import_directory(store, dir).await?;
  println!("Imported {} documents from {}", imported.len(), dir.display());
  Ok(())
}

pub async fn run_list(
  browser: &mut DocumentBrowser,
  search: Option<&str>,
  format: OutputFormat,
) -> Result<(), anyhow::Error> {
  browser
    .search(search.unwrap_or_default())
    .await
    .map_err(with_notice)?;
  print_view(browser, format)
}

pub async fn run_show(
  browser: &mut DocumentBrowser,
  row: usize,
  search: Option<&str>,
  format: OutputFormat,
) -> Result<(), anyhow::Error> {
  browser
    .search(search.unwrap_or_default())
    .await
    .map_err(with_notice)?;
  let index = row_index(row, browser.len()).map_err(with_notice)?;
  if let Some(doc) = browser.selected(index) {
    print_document(doc, format)?;
  }
  Ok(())
}

pub async fn run_delete(
  browser: &mut DocumentBrowser,
  row: usize,
  search: Option<&str>,
) -> Result<(), anyhow::Error> {
  browser
    .search(search.unwrap_or_default())
    .await
    .map_err(with_notice)?;
  let index = row_index(row, browser.len()).map_err(with_notice)?;
  let removed = browser.delete_at(index).await.map_err(with_notice)?;
  println!(
    "Deleted {}",
    removed.name.as_deref().unwrap_or("(untitled)")
  );
  Ok(())
}

pub fn print_view(browser: &DocumentBrowser, format: OutputFormat) -> Result<(), anyhow::Error> {
  match format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&browser.rows())?),
    OutputFormat::Table => {
      if browser.is_empty() {
        println!("{}", "No documents".dimmed());
      } else {
        println!("{}", render_table(browser));
      }
    }
  }
  Ok(())
}

pub fn render_table(browser: &DocumentBrowser) -> Table {
  let mut table = Table::new();
  table
    .load_preset(UTF8_FULL)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_header(vec!["#", "Name", "Size", "Modified"]);
  for (i, row) in browser.rows().into_iter().enumerate() {
    table.add_row(vec![(i + 1).to_string(), row.name, row.size, row.modified]);
  }
  table
}

pub fn print_document(doc: &Document, format: OutputFormat) -> Result<(), anyhow::Error> {
  match format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(doc)?),
    OutputFormat::Table => {
      println!("{}", doc.name.as_deref().unwrap_or("(untitled)").bold());
      println!("{}", "-".repeat(40));
      println!("{}", doc.content.as_deref().unwrap_or(""));
    }
  }
  Ok(())
}
