//! Detection entry points: resolve explicit choices against project markers

use std::path::Path;

use tracing::debug;

use crate::error::DetectError;
use crate::languages::{javascript, python, rust};
use tfq_core::{Framework, Language};

/// Explicit choices that take precedence over marker detection
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
  pub language: Option<Language>,
  pub framework: Option<Framework>,
}

/// Resolve the language and framework for a project.
///
/// Explicit choices win over detection. An explicit framework implies its
/// primary language unless markers say otherwise; an explicit language picks
/// the detected (or default) framework for that language.
pub fn detect(root: &Path, opts: &DetectOptions) -> Result<(Language, Framework), DetectError> {
  if !root.is_dir() {
    return Err(DetectError::MissingRoot(root.to_path_buf()));
  }

  let resolved = match (opts.language, opts.framework) {
    (Some(language), Some(framework)) => {
      if !framework.supports(language) {
        return Err(DetectError::FrameworkMismatch { framework, language });
      }
      (language, framework)
    }
    (Some(language), None) => (language, detect_framework(root, language)?),
    (None, Some(framework)) => {
      // Prefer the detected language when it is one the framework serves
      let language = detect_language(root)
        .ok()
        .filter(|l| framework.supports(*l))
        .unwrap_or_else(|| framework.primary_language());
      (language, framework)
    }
    (None, None) => {
      let language = detect_language(root)?;
      (language, detect_framework(root, language)?)
    }
  };

  debug!(
    root = %root.display(),
    language = %resolved.0,
    framework = %resolved.1,
    "Resolved project language and framework"
  );
  Ok(resolved)
}

/// Detect the project language from marker files.
///
/// Precedence: Rust > Python > JavaScript/TypeScript. A project with both a
/// `Cargo.toml` and a `package.json` is treated as Rust; pass an explicit
/// language to override.
pub fn detect_language(root: &Path) -> Result<Language, DetectError> {
  if rust::is_project(root) {
    return Ok(Language::Rust);
  }
  if python::is_project(root) {
    return Ok(Language::Python);
  }
  if javascript::is_project(root) {
    return Ok(javascript::variant(root));
  }
  Err(DetectError::UnknownLanguage(root.to_path_buf()))
}

/// Detect the test framework for a known language
pub fn detect_framework(root: &Path, language: Language) -> Result<Framework, DetectError> {
  let framework = match language {
    Language::Javascript | Language::Typescript => javascript::detect_framework(root),
    Language::Python => python::detect_framework(root),
    Language::Rust => rust::detect_framework(root),
  };
  Ok(framework)
}
