mod app;
mod cli;
mod config;
mod form;
mod infrastructure;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::app::App;
use crate::cli::Cli;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .compact()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).with_env_var("DINO_LOG").from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let with_baseline = cli.command.uses_baseline();
  let result = App::bootstrap(cli.baseline, with_baseline).and_then(|app| app.run(cli.command, &mut std::io::stdout().lock()));

  match result {
    Ok(outcome) => outcome.into(),
    Err(err) => {
      tracing::error!(error = %format!("{err:#}"), "command failed");
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
