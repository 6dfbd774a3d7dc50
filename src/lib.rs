pub mod browser;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod query;
pub mod types;

pub use browser::{DocumentBrowser, DocumentRow, RowFormatter};
pub use error::BrowserError;
pub use query::DocumentQueryService;
pub use types::{Document, DocumentPredicate, NewDocument};
