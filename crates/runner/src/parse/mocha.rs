//! mocha (spec reporter) output parsing
//!
//! Failures are numbered blocks whose title lines nest the suite path:
//!
//! ```text
//!   1) Calculator
//!        divide
//!          should throw on zero:
//!      AssertionError: expected [Function] to throw
//! ```
//!
//! The title lines are joined into `Calculator > divide > should throw on
//! zero`. The count comes from the `N failing` summary line.

use std::sync::LazyLock;

use regex::Regex;

use super::{ParsedFailures, push_unique};

static FAILING_SUMMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+) failing$").unwrap());
static FAILURE_HEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\) (.+)$").unwrap());

pub(crate) fn parse(text: &str) -> ParsedFailures {
  let mut parsed = ParsedFailures::default();
  let lines: Vec<&str> = text.lines().collect();

  // Numbered lines also appear as progress markers while the suite runs;
  // only the blocks after the `N failing` summary are failure reports
  let mut seen_summary = false;

  let mut i = 0;
  while i < lines.len() {
    let line = lines[i].trim();

    if let Some(captures) = FAILING_SUMMARY.captures(line)
      && let Ok(count) = captures[1].parse::<usize>()
    {
      parsed.total_failures = count;
      seen_summary = true;
      i += 1;
      continue;
    }

    if seen_summary && let Some(captures) = FAILURE_HEAD.captures(line) {
      let head = &captures[2];
      let mut title_parts = vec![head.trim_end_matches(':').to_string()];

      // A trailing ':' closes the title; until then the continuation lines
      // nest the suite path, and everything after the ':' line is the error
      let mut title_closed = head.ends_with(':');
      while !title_closed && i + 1 < lines.len() {
        let next = lines[i + 1].trim();
        if next.is_empty() {
          break;
        }
        title_closed = next.ends_with(':');
        title_parts.push(next.trim_end_matches(':').to_string());
        i += 1;
      }

      push_unique(&mut parsed.failing_tests, title_parts.join(" > "));
    }

    i += 1;
  }

  parsed
}
