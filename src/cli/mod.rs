mod commands;
mod repl;

pub use commands::{
  print_document, print_view, render_table, row_index, run_delete, run_import, run_init,
  run_list, run_show, CliArgs, Commands, OutputFormat,
};
pub use repl::Repl;
