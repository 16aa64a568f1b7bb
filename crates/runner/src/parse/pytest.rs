//! pytest output parsing
//!
//! Two sources of failing-test ids are recognized: verbose progress lines
//! (`tests/test_x.py::test_y FAILED [ 40%]`) and the short test summary
//! (`FAILED tests/test_x.py::test_y - AssertionError`). The failure count
//! comes from the final `== N failed, M passed ... ==` banner, with
//! collection errors counted alongside failures.

use std::sync::LazyLock;

use regex::Regex;

use super::{ParsedFailures, push_unique};

static SUMMARY_FAILED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+) failed").unwrap());
static SUMMARY_ERRORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+) errors?").unwrap());

pub(crate) fn parse(text: &str) -> ParsedFailures {
  let mut parsed = ParsedFailures::default();

  for line in text.lines() {
    let line = line.trim();

    // Short test summary info lines
    if let Some(rest) = line.strip_prefix("FAILED ").or_else(|| line.strip_prefix("ERROR "))
      && let Some(id) = rest.split_whitespace().next()
    {
      push_unique(&mut parsed.failing_tests, id.to_string());
      continue;
    }

    // Verbose progress lines: `path::test_id FAILED [ 40%]`
    let mut tokens = line.split_whitespace();
    if let (Some(first), Some(second)) = (tokens.next(), tokens.next())
      && first.contains("::")
      && (second == "FAILED" || second == "ERROR")
    {
      push_unique(&mut parsed.failing_tests, first.to_string());
      continue;
    }

    // Final banner: `=========== 2 failed, 10 passed in 0.12s ===========`
    if line.starts_with('=') && (line.contains(" failed") || line.contains(" error")) {
      let failed = SUMMARY_FAILED
        .captures(line)
        .and_then(|c| c[1].parse::<usize>().ok())
        .unwrap_or(0);
      let errors = SUMMARY_ERRORS
        .captures(line)
        .and_then(|c| c[1].parse::<usize>().ok())
        .unwrap_or(0);
      parsed.total_failures = failed + errors;
    }
  }

  parsed
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_short_summary_lines() {
    let output = "\
=================================== FAILURES ===================================
FAILED tests/test_calculator.py::TestBasicOperations::test_division_wrong_result - assert 5.0 == 3
FAILED tests/test_calculator.py::TestBasicOperations::test_complex_calculation_error - assert 20 == 15
========================= 2 failed, 10 passed in 0.15s =========================
";
    let parsed = parse(output);
    assert_eq!(parsed.total_failures, 2);
    assert_eq!(
      parsed.failing_tests,
      vec![
        "tests/test_calculator.py::TestBasicOperations::test_division_wrong_result",
        "tests/test_calculator.py::TestBasicOperations::test_complex_calculation_error",
      ]
    );
  }

  #[test]
  fn test_verbose_progress_lines_dedupe_with_summary() {
    let output = "\
tests/test_advanced.py::TestEdgeCases::test_float_precision_issue FAILED  [ 62%]
tests/test_advanced.py::TestEdgeCases::test_mixed_int_float PASSED       [ 75%]
=========================== short test summary info ============================
FAILED tests/test_advanced.py::TestEdgeCases::test_float_precision_issue - assert 0.30000000000000004 == 0.3
========================= 1 failed, 7 passed in 0.09s ==========================
";
    let parsed = parse(output);
    assert_eq!(parsed.total_failures, 1);
    assert_eq!(
      parsed.failing_tests,
      vec!["tests/test_advanced.py::TestEdgeCases::test_float_precision_issue"]
    );
  }

  #[test]
  fn test_collection_errors_counted() {
    let output = "\
ERROR tests/test_broken.py - ModuleNotFoundError: No module named 'missing'
=========================== 1 error in 0.02s ===========================
";
    let parsed = parse(output);
    assert_eq!(parsed.total_failures, 1);
    assert_eq!(parsed.failing_tests, vec!["tests/test_broken.py"]);
  }

  #[test]
  fn test_all_passing() {
    let output = "============================== 12 passed in 0.34s ==============================\n";
    let parsed = parse(output);
    assert_eq!(parsed, ParsedFailures::default());
  }
}
