//! Per-framework output parsing
//!
//! Every parser works on ANSI-stripped text and extracts two things: the
//! framework's own count of failed test cases, and an identifier per failing
//! test in the framework's native vocabulary (pytest node ids, jest/vitest
//! file paths, mocha titles, cargo test names).

mod cargo;
mod jest;
mod mocha;
mod pytest;
mod vitest;

use crate::ansi::strip_ansi;
use tfq_core::Framework;

/// Failures extracted from a suite's output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFailures {
  /// Failed test case count, from the framework's summary line
  pub total_failures: usize,
  /// Distinct failing-test identifiers, first-seen order
  pub failing_tests: Vec<String>,
}

/// Parse the captured output of a test run.
///
/// stdout and stderr are combined before parsing; jest, for one, writes its
/// entire report to stderr.
pub fn parse_output(framework: Framework, stdout: &str, stderr: &str) -> ParsedFailures {
  let text = format!("{}\n{}", strip_ansi(stdout), strip_ansi(stderr));

  let mut parsed = match framework {
    Framework::Jest => jest::parse(&text),
    Framework::Vitest => vitest::parse(&text),
    Framework::Mocha => mocha::parse(&text),
    Framework::Pytest => pytest::parse(&text),
    Framework::Cargo => cargo::parse(&text),
  };

  // No summary line (crashed runner, truncated output): fall back to the
  // number of distinct failing tests seen
  if parsed.total_failures == 0 && !parsed.failing_tests.is_empty() {
    parsed.total_failures = parsed.failing_tests.len();
  }

  parsed
}

/// Push `id` unless it is already present, preserving first-seen order
pub(crate) fn push_unique(list: &mut Vec<String>, id: String) {
  if !list.iter().any(|existing| *existing == id) {
    list.push(id);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_clean_run_has_no_failures() {
    let stdout = "===== 12 passed in 0.34s =====\n";
    let parsed = parse_output(Framework::Pytest, stdout, "");
    assert_eq!(parsed, ParsedFailures::default());
  }

  #[test]
  fn test_stderr_is_parsed_too() {
    let stderr = "FAIL src/calculator.test.js\nTests:       1 failed, 4 passed, 5 total\n";
    let parsed = parse_output(Framework::Jest, "", stderr);
    assert_eq!(parsed.total_failures, 1);
    assert_eq!(parsed.failing_tests, vec!["src/calculator.test.js"]);
  }

  #[test]
  fn test_count_falls_back_to_distinct_tests() {
    // Truncated output with failing lines but no summary
    let stdout = "FAILED tests/test_a.py::test_one - AssertionError\nFAILED tests/test_a.py::test_two - AssertionError\n";
    let parsed = parse_output(Framework::Pytest, stdout, "");
    assert_eq!(parsed.total_failures, 2);
  }

  #[test]
  fn test_fallback_does_not_mix_file_and_test_entries() {
    // Vitest lists the failing file and its failing tests; without a summary
    // line the count is the tests, not file plus tests
    let stdout = "\
 ❯ tests/calculator.test.ts (8 tests | 2 failed) 14ms
 FAIL  tests/calculator.test.ts > Calculator > divide by zero returns Infinity
 FAIL  tests/calculator.test.ts > Calculator > multiply propagates NaN
";
    let parsed = parse_output(Framework::Vitest, stdout, "");
    assert_eq!(parsed.total_failures, 2);
  }

  #[test]
  fn test_colored_output_is_stripped_before_parsing() {
    let stdout = "\u{1b}[31mFAILED\u{1b}[0m tests/test_calc.py::test_divide - assert 5 == 3\n\
                  \u{1b}[31m=========== 1 failed, 9 passed in 0.21s ===========\u{1b}[0m\n";
    let parsed = parse_output(Framework::Pytest, stdout, "");
    assert_eq!(parsed.total_failures, 1);
    assert_eq!(parsed.failing_tests, vec!["tests/test_calc.py::test_divide"]);
  }
}
