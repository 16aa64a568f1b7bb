//! vitest output parsing
//!
//! Failing files show up as `❯ path (N tests | M failed)` in the file list
//! and as `FAIL  path > suite > test` lines in the failure report. The
//! count comes from the `Tests  N failed | M passed (T)` summary; the
//! `Test Files` line above it is deliberately not matched.

use std::sync::LazyLock;

use regex::Regex;

use super::{ParsedFailures, push_unique};

static FILE_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^❯ (\S+) \(\d+ tests? \| (\d+) failed\)").unwrap());
static TESTS_SUMMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Tests\s+(\d+) failed").unwrap());

pub(crate) fn parse(text: &str) -> ParsedFailures {
  let mut parsed = ParsedFailures::default();

  // Tracked separately so a run killed before the summary printed does not
  // count a file entry on top of its own per-test FAIL entries
  let mut file_line_failures = 0usize;
  let mut test_entries = 0usize;

  for line in text.lines() {
    let line = line.trim();

    if let Some(captures) = FILE_LINE.captures(line) {
      if let Ok(count) = captures[2].parse::<usize>() {
        file_line_failures += count;
      }
      push_unique(&mut parsed.failing_tests, captures[1].to_string());
      continue;
    }

    if let Some(rest) = line.strip_prefix("FAIL ") {
      let id = rest.trim().to_string();
      if !parsed.failing_tests.contains(&id) {
        test_entries += 1;
      }
      push_unique(&mut parsed.failing_tests, id);
      continue;
    }

    if let Some(captures) = TESTS_SUMMARY.captures(line)
      && let Ok(count) = captures[1].parse::<usize>()
    {
      parsed.total_failures = count;
    }
  }

  // No summary line: prefer the distinct FAIL test entries, then the failed
  // counts from the file list
  if parsed.total_failures == 0 {
    parsed.total_failures = if test_entries > 0 { test_entries } else { file_line_failures };
  }

  parsed
}
