//! Configuration system for tfq with per-project overrides.
//!
//! Config priority: project-relative (.tfq/config.toml) > user (~/.config/tfq/config.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Defaults Configuration
// ============================================================================

/// Default language/framework used when no flag is given and auto-detect is off
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
  /// Default language (javascript, typescript, python, rust)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,

  /// Default framework (jest, vitest, mocha, pytest, cargo)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub framework: Option<String>,
}

// ============================================================================
// Run Configuration
// ============================================================================

/// Test run behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
  /// Timeout for a whole test suite run in seconds (default: 300)
  pub timeout_secs: u64,

  /// Log level: "off", "error", "warn", "info", "debug", "trace"
  /// Default: "info"
  pub log_level: String,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      timeout_secs: 300,
      log_level: "info".to_string(),
    }
  }
}

// ============================================================================
// Main Configuration
// ============================================================================

/// tfq configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Language/framework defaults
  #[serde(default)]
  pub defaults: DefaultsConfig,

  /// Test run behavior
  #[serde(default)]
  pub run: RunConfig,
}

impl Config {
  /// Load config for a project, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    // Try project-relative first
    let project_config = Self::project_config_path(project_path);
    if project_config.exists()
      && let Ok(content) = std::fs::read_to_string(&project_config)
      && let Ok(config) = toml::from_str(&content)
    {
      return config;
    }

    // Fall back to user config
    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(content) = std::fs::read_to_string(&user_config_path)
      && let Ok(config) = toml::from_str(&content)
    {
      return config;
    }

    // Default
    Self::default()
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("TFQ_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("tfq").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("tfq").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(".tfq").join("config.toml")
  }
}
