//! Subprocess execution for test suites
//!
//! Commands run through the platform shell so framework invocations like
//! `npx jest` or `python -m pytest -v` behave the way they do in a terminal.

use std::{
  path::Path,
  process::Stdio,
  time::{Duration, Instant},
};

use tokio::{process::Command, time::timeout};
use tracing::{debug, trace, warn};

use crate::error::RunnerError;

/// Captured output of a finished test command
#[derive(Debug)]
pub struct SuiteOutput {
  /// Exit code (-1 when the process was terminated by a signal)
  pub exit_code: i32,
  pub stdout: String,
  pub stderr: String,
}

/// Execute `command` in `root` through the platform shell.
///
/// The child is killed when the timeout elapses. A non-zero exit is not an
/// error; the caller decides what the exit code means.
pub async fn execute(command: &str, root: &Path, timeout_secs: u64) -> Result<SuiteOutput, RunnerError> {
  let start = Instant::now();
  let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };

  trace!(shell, command, root = %root.display(), "Spawning test command");

  let mut cmd = Command::new(shell);
  cmd
    .arg(flag)
    .arg(command)
    .current_dir(root)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    // Dropping the output future on timeout must not leave the suite running
    .kill_on_drop(true);

  let output = match timeout(Duration::from_secs(timeout_secs), cmd.output()).await {
    Ok(Ok(output)) => output,
    Ok(Err(e)) => {
      warn!(err = %e, command, "Failed to spawn test command");
      return Err(e.into());
    }
    Err(_) => {
      warn!(
        timeout_secs,
        elapsed_ms = start.elapsed().as_millis() as u64,
        command,
        "Test suite timed out"
      );
      return Err(RunnerError::Timeout(timeout_secs));
    }
  };

  let exit_code = output.status.code().unwrap_or(-1);
  let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
  let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

  debug!(
    exit_code,
    stdout_len = stdout.len(),
    stderr_len = stderr.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "Test command completed"
  );

  Ok(SuiteOutput {
    exit_code,
    stdout,
    stderr,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[cfg(unix)]
  #[tokio::test]
  async fn test_execute_captures_output_and_exit_code() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = execute("echo out; echo err >&2; exit 3", temp.path(), 10).await.unwrap();

    assert_eq!(output.exit_code, 3);
    assert_eq!(output.stdout.trim(), "out");
    assert_eq!(output.stderr.trim(), "err");
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn test_execute_runs_in_the_project_root() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("marker.txt"), "here").unwrap();

    let output = execute("cat marker.txt", temp.path(), 10).await.unwrap();
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "here");
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn test_execute_times_out() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = execute("sleep 5", temp.path(), 1).await.unwrap_err();
    assert!(matches!(err, RunnerError::Timeout(1)));
  }
}
