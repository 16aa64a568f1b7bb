//! Logging setup for CLI commands

use std::path::Path;

use tfq_core::Config;
use tracing_subscriber::EnvFilter;

/// Parse log level from config string
fn parse_log_level(level: &str) -> tracing::Level {
  match level.to_lowercase().as_str() {
    "off" | "error" => tracing::Level::ERROR,
    "warn" => tracing::Level::WARN,
    "info" => tracing::Level::INFO,
    "debug" => tracing::Level::DEBUG,
    "trace" => tracing::Level::TRACE,
    _ => tracing::Level::INFO,
  }
}

/// Default log level for a project, from its config
fn default_level(project_root: &Path) -> tracing::Level {
  let config = Config::load_for_project(project_root);
  parse_log_level(&config.run.log_level)
}

/// Initialize console logging.
///
/// The default level comes from the target project's config (RUST_LOG
/// overrides). Logs go to stderr so `--json` output on stdout stays
/// machine-readable.
pub fn init_cli_logging(project_root: &Path) {
  let env_filter = EnvFilter::builder()
    .with_default_directive(default_level(project_root).into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}
