use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::db::BackendType;

/// Expand `$VAR` and `${VAR}` references in one forward pass.
/// Unset variables expand to ""; substituted values are never re-expanded.
fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(braced) = after.strip_prefix('{') {
      if let Some(end) = braced.find('}') {
        out.push_str(&env_value(&braced[..end]));
        rest = &braced[end + 1..];
        continue;
      }
    } else {
      let len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
      if len > 0 {
        out.push_str(&env_value(&after[..len]));
        rest = &after[len..];
        continue;
      }
    }

    out.push('$');
    rest = after;
  }

  out.push_str(rest);
  out
}

fn env_value(name: &str) -> String {
  std::env::var(name).unwrap_or_default()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserConfig {
  #[serde(default)]
  pub store: StoreSection,
  #[serde(default)]
  pub logging: LoggingSection,
  #[serde(default)]
  pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
  #[serde(default)]
  pub backend: BackendType,
  /// SQLite database file; ":memory:" for a private in-memory database
  #[serde(default = "default_store_path")]
  pub path: String,
}
fn default_store_path() -> String {
  "documents.db".into()
}
impl Default for StoreSection {
  fn default() -> Self {
    Self {
      backend: BackendType::default(),
      path: default_store_path(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "warn".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
  /// chrono format string for the modified column
  #[serde(default = "default_date_format")]
  pub date_format: String,
}
pub(crate) fn default_date_format() -> String {
  "%b %-d, %Y at %-I:%M:%S %p".into()
}
impl Default for DisplaySection {
  fn default() -> Self {
    Self {
      date_format: default_date_format(),
    }
  }
}

impl DisplaySection {
  /// Reject date formats chrono cannot render.
  pub fn validate(&self) -> Result<(), anyhow::Error> {
    if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
      anyhow::bail!("Invalid display.date_format: {:?}", self.date_format);
    }
    Ok(())
  }
}

impl BrowserConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    let expanded = expand_env_vars(&content);
    let config: Self = serde_yaml::from_str(&expanded)?;
    config.display.validate()?;
    Ok(config)
  }

  pub fn find_and_load() -> Result<Option<Self>, anyhow::Error> {
    Self::find_and_load_in(".")
  }

  /// Look for `docsearch.yaml` / `docsearch.yml` in `dir`.
  pub fn find_and_load_in(dir: impl AsRef<Path>) -> Result<Option<Self>, anyhow::Error> {
    for name in ["docsearch.yaml", "docsearch.yml"] {
      let p = dir.as_ref().join(name);
      if p.exists() {
        tracing::info!("Loading config from {}", p.display());
        return Ok(Some(Self::from_file(p)?));
      }
    }
    Ok(None)
  }
}
