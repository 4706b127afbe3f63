use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dino_export::ExportFormat;

#[derive(Parser)]
#[command(name = "dino", version, about = "Build, validate and export song lessons", long_about = None)]
pub struct Cli {
  /// Published song set (JSON list or songs-data.js) to merge with and to
  /// continue ids from. Overrides `[export] baseline`.
  #[arg(long, global = true, value_name = "FILE", env = "DINO_BASELINE")]
  pub baseline: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Resolve a YouTube URL or bare id and show the derived links
  Resolve {
    input: String,
  },

  /// Build a song from a form file, validate it and print its JSON
  Generate {
    #[arg(short, long, value_name = "FILE")]
    form: PathBuf,
  },

  /// Build, validate and add (or replace) a song in the local set
  Add {
    #[arg(short, long, value_name = "FILE")]
    form: PathBuf,
  },

  /// List the local set, sorted by artist
  List,

  /// Print the JSON of one song from the local set
  Show {
    id: u64,
  },

  /// Remove one song from the local set
  Remove {
    id: u64,
  },

  /// Empty the local set
  Clear {
    /// Confirm that every song in the local set should be deleted.
    #[arg(long)]
    yes: bool,
  },

  /// Print the id the next song without an explicit id will get
  NextId,

  /// Export the merged set (or a single form with --form)
  Export {
    #[arg(value_enum)]
    format: FormatArg,

    /// Export just this form instead of the merged set.
    #[arg(short, long, value_name = "FILE")]
    form: Option<PathBuf>,

    /// Output directory. Overrides `[export] out_dir`.
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Print to stdout instead of writing files.
    #[arg(long, conflicts_with = "out")]
    stdout: bool,
  },

  /// Print an empty form file to start from
  FormTemplate,

  /// Show the effective configuration and paths
  Config,
}

impl Commands {
  /// Commands that continue ids from, or merge with, the published set.
  pub fn uses_baseline(&self) -> bool {
    matches!(self, Commands::Generate { .. } | Commands::Add { .. } | Commands::NextId | Commands::Export { .. })
  }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
  Json,
  /// songs-data.js style module
  Module,
  /// songs / tasks / lyrics tables
  Csv,
}

impl From<FormatArg> for ExportFormat {
  fn from(arg: FormatArg) -> Self {
    match arg {
      FormatArg::Json => ExportFormat::Json,
      FormatArg::Module => ExportFormat::Module,
      FormatArg::Csv => ExportFormat::Csv,
    }
  }
}
