//! Per-language marker rules

pub(crate) mod javascript;
pub(crate) mod python;
pub(crate) mod rust;

use std::path::Path;

/// True if any of the named files exists directly under `root`
pub(crate) fn any_marker(root: &Path, names: &[&str]) -> bool {
  names.iter().any(|name| root.join(name).is_file())
}
