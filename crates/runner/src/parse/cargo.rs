//! `cargo test` output parsing
//!
//! A workspace run prints one `test result:` line per test binary; the
//! failure counts are summed across them.

use std::sync::LazyLock;

use regex::Regex;

use super::{ParsedFailures, push_unique};

static TEST_FAILED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^test (\S+) \.\.\. FAILED$").unwrap());
static RESULT_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^test result: FAILED\. \d+ passed; (\d+) failed;").unwrap());

pub(crate) fn parse(text: &str) -> ParsedFailures {
  let mut parsed = ParsedFailures::default();

  for line in text.lines() {
    let line = line.trim();

    if let Some(captures) = TEST_FAILED.captures(line) {
      push_unique(&mut parsed.failing_tests, captures[1].to_string());
      continue;
    }

    if let Some(captures) = RESULT_LINE.captures(line)
      && let Ok(count) = captures[1].parse::<usize>()
    {
      parsed.total_failures += count;
    }
  }

  parsed
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_single_binary_failures() {
    let output = "\
running 5 tests
test calc::tests::test_add ... ok
test calc::tests::test_divide_by_zero ... FAILED
test calc::tests::test_sqrt_negative ... FAILED

failures:

---- calc::tests::test_divide_by_zero stdout ----
thread 'calc::tests::test_divide_by_zero' panicked at src/calc.rs:42:5

failures:
    calc::tests::test_divide_by_zero
    calc::tests::test_sqrt_negative

test result: FAILED. 3 passed; 2 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s
";
    let parsed = parse(output);
    assert_eq!(parsed.total_failures, 2);
    assert_eq!(
      parsed.failing_tests,
      vec!["calc::tests::test_divide_by_zero", "calc::tests::test_sqrt_negative"]
    );
  }

  #[test]
  fn test_workspace_results_are_summed() {
    let output = "\
test a::one ... FAILED
test result: FAILED. 4 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.02s

test b::two ... FAILED
test result: FAILED. 9 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.03s
";
    let parsed = parse(output);
    assert_eq!(parsed.total_failures, 2);
    assert_eq!(parsed.failing_tests, vec!["a::one", "b::two"]);
  }

  #[test]
  fn test_all_passing() {
    let output = "\
running 3 tests
test calc::tests::test_add ... ok
test result: ok. 3 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s
";
    let parsed = parse(output);
    assert_eq!(parsed, ParsedFailures::default());
  }
}
