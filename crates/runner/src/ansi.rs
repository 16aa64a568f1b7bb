//! ANSI escape stripping
//!
//! Test runners colorize their output even through pipes when forced by CI
//! environment variables. Parsing runs on the stripped text.

/// Remove ANSI escape sequences (CSI and two-byte escapes) from `input`
pub(crate) fn strip_ansi(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.chars().peekable();

  while let Some(c) = chars.next() {
    if c != '\u{1b}' {
      out.push(c);
      continue;
    }

    match chars.peek() {
      // CSI sequence: ESC [ parameters, terminated by a byte in @..=~
      Some('[') => {
        chars.next();
        for c in chars.by_ref() {
          if ('@'..='~').contains(&c) {
            break;
          }
        }
      }
      // Two-byte escape (ESC c, ESC M, ...)
      Some(_) => {
        chars.next();
      }
      None => {}
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_plain_text_untouched() {
    assert_eq!(strip_ansi("2 failed, 10 passed"), "2 failed, 10 passed");
  }

  #[test]
  fn test_color_codes_removed() {
    let colored = "\u{1b}[31mFAILED\u{1b}[0m tests/test_calc.py::test_divide";
    assert_eq!(strip_ansi(colored), "FAILED tests/test_calc.py::test_divide");
  }

  #[test]
  fn test_multi_parameter_sequences() {
    let colored = "\u{1b}[1;32m✓\u{1b}[39;49m passed";
    assert_eq!(strip_ansi(colored), "✓ passed");
  }

  #[test]
  fn test_trailing_escape_does_not_panic() {
    assert_eq!(strip_ansi("done\u{1b}"), "done");
    assert_eq!(strip_ansi("done\u{1b}["), "done");
  }
}
