//! JavaScript/TypeScript project markers
//!
//! Framework detection checks dedicated config files first, then
//! package.json dependencies, then the `test` script. Config files win
//! because a repo migrating between runners usually keeps stale deps around
//! longer than stale configs.

use std::path::Path;

use serde_json::Value;
use tracing::trace;

use super::any_marker;
use tfq_core::{Framework, Language};

const VITEST_CONFIGS: &[&str] = &[
  "vitest.config.ts",
  "vitest.config.js",
  "vitest.config.mts",
  "vitest.config.mjs",
  "vitest.workspace.ts",
];

const JEST_CONFIGS: &[&str] = &[
  "jest.config.js",
  "jest.config.ts",
  "jest.config.mjs",
  "jest.config.cjs",
  "jest.config.json",
];

const MOCHA_CONFIGS: &[&str] = &[
  ".mocharc.yml",
  ".mocharc.yaml",
  ".mocharc.json",
  ".mocharc.js",
  ".mocharc.cjs",
];

pub fn is_project(root: &Path) -> bool {
  root.join("package.json").is_file()
}

/// TypeScript when a tsconfig sits next to package.json, JavaScript otherwise
pub fn variant(root: &Path) -> Language {
  if root.join("tsconfig.json").is_file() {
    Language::Typescript
  } else {
    Language::Javascript
  }
}

pub fn detect_framework(root: &Path) -> Framework {
  if any_marker(root, VITEST_CONFIGS) {
    return Framework::Vitest;
  }
  if any_marker(root, JEST_CONFIGS) {
    return Framework::Jest;
  }
  if any_marker(root, MOCHA_CONFIGS) {
    return Framework::Mocha;
  }

  if let Some(framework) = framework_from_package_json(root) {
    return framework;
  }

  Framework::Jest
}

/// Inspect package.json dependencies and the test script.
///
/// An unreadable or malformed package.json is ignored rather than an error;
/// the caller falls back to the default framework.
fn framework_from_package_json(root: &Path) -> Option<Framework> {
  let content = std::fs::read_to_string(root.join("package.json")).ok()?;
  let package: Value = match serde_json::from_str(&content) {
    Ok(value) => value,
    Err(e) => {
      trace!(err = %e, "Ignoring malformed package.json");
      return None;
    }
  };

  for section in ["devDependencies", "dependencies"] {
    if let Some(deps) = package.get(section).and_then(Value::as_object) {
      if deps.contains_key("vitest") {
        return Some(Framework::Vitest);
      }
      if deps.contains_key("jest") {
        return Some(Framework::Jest);
      }
      if deps.contains_key("mocha") {
        return Some(Framework::Mocha);
      }
    }
  }

  let test_script = package
    .get("scripts")
    .and_then(|s| s.get("test"))
    .and_then(Value::as_str)?;
  if test_script.contains("vitest") {
    return Some(Framework::Vitest);
  }
  if test_script.contains("jest") {
    return Some(Framework::Jest);
  }
  if test_script.contains("mocha") {
    return Some(Framework::Mocha);
  }

  None
}
