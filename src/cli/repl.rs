use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::commands::{print_document, print_view, row_index, OutputFormat};
use crate::browser::DocumentBrowser;
use crate::error::BrowserError;

const HELP: &str = "Commands: .help, .list, .search <term>, .clear, .open <row>, .delete <row>, .quit
Any other line searches for that text.";

pub struct Repl {
  browser: DocumentBrowser,
  editor: DefaultEditor,
  format: OutputFormat,
}

impl Repl {
  pub fn new(browser: DocumentBrowser, format: OutputFormat) -> Result<Self, anyhow::Error> {
    Ok(Self {
      browser,
      editor: DefaultEditor::new()?,
      format,
    })
  }

  pub async fn run(&mut self) -> Result<(), anyhow::Error> {
    println!(
      "{} v{}",
      "docsearch".green().bold(),
      env!("CARGO_PKG_VERSION")
    );
    println!("Type {} for help\n", ".help".cyan());

    let result = self.browser.refresh().await.map(|_| ());
    self.show(result);

    loop {
      match self.editor.readline(&self.prompt()) {
        Ok(line) => {
          let line = line.trim();
          if line.is_empty() {
            continue;
          }
          let _ = self.editor.add_history_entry(line);
          if line.starts_with('.') {
            if !self.command(line).await {
              break;
            }
          } else {
            let result = self.browser.search(line).await.map(|_| ());
            self.show(result);
          }
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
        Err(e) => {
          eprintln!("Error: {:?}", e);
          break;
        }
      }
    }
    Ok(())
  }

  fn prompt(&self) -> String {
    if self.browser.is_searching() {
      format!("{} ", format!("search[{}]>", self.browser.term()).green())
    } else {
      format!("{} ", "docs>".green())
    }
  }

  async fn command(&mut self, line: &str) -> bool {
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
      Some((cmd, arg)) => (cmd, arg.trim()),
      None => (line, ""),
    };

    match cmd {
      ".help" => println!("{}", HELP),
      ".list" => {
        let result = self.browser.refresh().await.map(|_| ());
        self.show(result);
      }
      ".search" => {
        let result = self.browser.search(arg).await.map(|_| ());
        self.show(result);
      }
      ".clear" => {
        let result = self.browser.clear_search().await.map(|_| ());
        self.show(result);
      }
      ".open" => match self.parse_row(arg) {
        Ok(index) => {
          if let Some(doc) = self.browser.selected(index) {
            if let Err(e) = print_document(doc, self.format) {
              eprintln!("{}: {}", "Error".red(), e);
            }
          }
        }
        Err(e) => report(&e),
      },
      ".delete" => match self.parse_row(arg) {
        Ok(index) => {
          let result = self.browser.delete_at(index).await.map(|_| ());
          self.show(result);
        }
        Err(e) => report(&e),
      },
      ".quit" | ".exit" => return false,
      _ => eprintln!("Unknown command, type {} for help", ".help".cyan()),
    }
    true
  }

  fn parse_row(&self, arg: &str) -> Result<usize, BrowserError> {
    let len = self.browser.len();
    let row = arg
      .parse::<usize>()
      .map_err(|_| BrowserError::NoSuchRow { row: 0, len })?;
    row_index(row, len)
  }

  /// Print the list after an action; on failure print the notice first.
  /// The list is printed either way since it stays consistent.
  fn show(&self, result: Result<(), BrowserError>) {
    if let Err(e) = &result {
      report(e);
    }
    if let Err(e) = print_view(&self.browser, self.format) {
      eprintln!("{}: {}", "Error".red(), e);
    }
  }
}

fn report(e: &BrowserError) {
  tracing::debug!(error = %e, "Browser action failed");
  eprintln!("{}: {}", "Alert".red(), e.notice());
}
