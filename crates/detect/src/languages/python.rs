//! Python project markers

use std::path::Path;

use super::any_marker;
use tfq_core::Framework;

/// Files that mark a directory as a Python project
const MARKERS: &[&str] = &[
  "pyproject.toml",
  "pytest.ini",
  "setup.py",
  "setup.cfg",
  "conftest.py",
  "requirements.txt",
  "tox.ini",
];

pub fn is_project(root: &Path) -> bool {
  any_marker(root, MARKERS)
}

/// Pytest is the only supported Python framework
pub fn detect_framework(_root: &Path) -> Framework {
  Framework::Pytest
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_python_markers() {
    for marker in ["pyproject.toml", "pytest.ini", "conftest.py", "requirements.txt"] {
      let temp = TempDir::new().unwrap();
      std::fs::write(temp.path().join(marker), "").unwrap();
      assert!(is_project(temp.path()), "marker: {}", marker);
    }
  }

  #[test]
  fn test_empty_directory_is_not_python() {
    let temp = TempDir::new().unwrap();
    assert!(!is_project(temp.path()));
  }
}
