//! Test command execution and failure parsing for tfq
//!
//! Given a resolved language/framework pair, this crate builds the test
//! command, executes it through the platform shell with a timeout, and parses
//! the captured output into a [`RunResult`]. A failing suite is data, not an
//! error: only spawn failures and timeouts surface as [`RunnerError`].

mod ansi;
mod command;
mod error;
mod exec;
mod parse;

pub use command::command_for;
pub use error::RunnerError;
pub use exec::{SuiteOutput, execute};
pub use parse::{ParsedFailures, parse_output};

use std::path::PathBuf;

use tracing::{debug, info};

use tfq_core::{Framework, Language, RunResult};

/// Everything needed to run one test suite
#[derive(Debug, Clone)]
pub struct RunSpec {
  /// Project root the command runs in
  pub root: PathBuf,
  pub language: Language,
  pub framework: Framework,
  /// Override the framework's default command line (used by tests and
  /// callers that wrap the runner in a custom harness)
  pub command: Option<String>,
  /// Suite timeout in seconds
  pub timeout_secs: u64,
}

/// Run the test suite described by `spec` and report the outcome
pub async fn run(spec: RunSpec) -> Result<RunResult, RunnerError> {
  let command = spec
    .command
    .clone()
    .unwrap_or_else(|| command_for(spec.framework).to_string());

  debug!(
    root = %spec.root.display(),
    framework = %spec.framework,
    command = %command,
    timeout_secs = spec.timeout_secs,
    "Running test suite"
  );

  let output = execute(&command, &spec.root, spec.timeout_secs).await?;
  let parsed = parse_output(spec.framework, &output.stdout, &output.stderr);

  let success = output.exit_code == 0 && parsed.total_failures == 0;
  info!(
    success,
    exit_code = output.exit_code,
    total_failures = parsed.total_failures,
    "Test suite finished"
  );

  Ok(RunResult {
    success,
    exit_code: output.exit_code,
    total_failures: parsed.total_failures,
    failing_tests: parsed.failing_tests,
    language: spec.language,
    framework: spec.framework,
    command,
  })
}
