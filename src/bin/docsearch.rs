use clap::Parser;
use docsearch::browser::{DocumentBrowser, RowFormatter};
use docsearch::cli::{
  run_delete, run_import, run_init, run_list, run_show, CliArgs, Commands, Repl,
};
use docsearch::config::BrowserConfig;
use docsearch::db::{open_store, BackendType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let args = CliArgs::parse();

  // Load config: explicit path > auto-detect > defaults
  let mut config = if let Some(path) = &args.config {
    BrowserConfig::from_file(path)?
  } else {
    BrowserConfig::find_and_load()?.unwrap_or_default()
  };

  // CLI args override config file
  if let Some(path) = args.sqlite {
    config.store.path = path;
    config.store.backend = BackendType::Sqlite;
  }
  if let Some(backend) = args.backend {
    config.store.backend = backend;
  }
  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  tracing::info!(
    backend = %config.store.backend,
    path = %config.store.path,
    "Opening document store"
  );
  if config.store.backend == BackendType::Memory {
    tracing::warn!("Using the in-memory store; changes are discarded on exit");
  }

  let store = open_store(&config).await?;
  let mut browser = DocumentBrowser::new(store.clone())
    .with_formatter(RowFormatter::new(config.display.date_format.clone()));

  match args.subcommand {
    Some(Commands::Init) => run_init(store.as_ref()).await,
    Some(Commands::Import { dir }) => run_import(store.as_ref(), &dir).await,
    Some(Commands::List { search }) => run_list(&mut browser, search.as_deref(), args.format).await,
    Some(Commands::Show { row, search }) => {
      run_show(&mut browser, row, search.as_deref(), args.format).await
    }
    Some(Commands::Delete { row, search }) => {
      run_delete(&mut browser, row, search.as_deref()).await
    }
    None => Repl::new(browser, args.format)?.run().await,
  }
}
