use std::path::PathBuf;

use tfq_core::{Framework, Language};

/// Errors that can occur during language/framework detection
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
  #[error("No recognized project markers in {0}. Pass --language or --framework explicitly.")]
  UnknownLanguage(PathBuf),
  #[error("Framework '{framework}' does not run {language} tests")]
  FrameworkMismatch { framework: Framework, language: Language },
  #[error("Project directory does not exist: {0}")]
  MissingRoot(PathBuf),
}
