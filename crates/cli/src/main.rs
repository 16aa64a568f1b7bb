//! tfq CLI - run a project's test suite and report the failing tests

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

use commands::cmd_run;
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "tfq")]
#[command(about = "Run a project's test suite and report the failing tests")]
#[command(after_help = "\
QUICK START:
  tfq run                        # Auto-detect language/framework and run
  tfq run --language python      # Force the language
  tfq run --framework vitest     # Force the framework
  tfq run --json                 # Machine-readable result object")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the test suite and report failures
  Run {
    /// Project directory (default: current directory)
    path: Option<PathBuf>,
    /// Language to run tests for (javascript, typescript, python, rust)
    #[arg(long)]
    language: Option<String>,
    /// Test framework to invoke (jest, vitest, mocha, pytest, cargo)
    #[arg(long)]
    framework: Option<String>,
    /// Detect language and framework from project markers, ignoring config defaults
    #[arg(long)]
    auto_detect: bool,
    /// Output the run result as JSON
    #[arg(long)]
    json: bool,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Run {
      path,
      language,
      framework,
      auto_detect,
      json,
    } => {
      // Resolve the project root first; the logging level comes from that
      // project's config, not the caller's cwd
      let root = match path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
      };
      init_cli_logging(&root);

      cmd_run(root, language.as_deref(), framework.as_deref(), auto_detect, json).await
    }
  }
}
