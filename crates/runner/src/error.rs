/// Errors that can occur while executing a test suite
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
  #[error("Failed to spawn test command: {0}")]
  Spawn(#[from] std::io::Error),
  #[error("Test suite timed out after {0} seconds")]
  Timeout(u64),
}
