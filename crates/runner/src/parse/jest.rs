//! jest output parsing
//!
//! Jest reports per-file `FAIL path` lines and a final `Tests: N failed, ...`
//! summary. Failing tests are identified at file granularity; that is the
//! unit jest re-runs.

use std::sync::LazyLock;

use regex::Regex;

use super::{ParsedFailures, push_unique};

static TESTS_SUMMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Tests:.*?(\d+) failed").unwrap());

pub(crate) fn parse(text: &str) -> ParsedFailures {
  let mut parsed = ParsedFailures::default();

  for line in text.lines() {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("FAIL ")
      && let Some(path) = rest.split_whitespace().next()
    {
      push_unique(&mut parsed.failing_tests, path.to_string());
      continue;
    }

    if let Some(captures) = TESTS_SUMMARY.captures(line)
      && let Ok(count) = captures[1].parse::<usize>()
    {
      parsed.total_failures = count;
    }
  }

  parsed
}
