//! Rust project markers

use std::path::Path;

use tfq_core::Framework;

pub fn is_project(root: &Path) -> bool {
  root.join("Cargo.toml").is_file()
}

/// Rust tests always run through cargo
pub fn detect_framework(_root: &Path) -> Framework {
  Framework::Cargo
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_cargo_toml_marks_rust() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();
    assert!(is_project(temp.path()));
    assert_eq!(detect_framework(temp.path()), Framework::Cargo);
  }
}
