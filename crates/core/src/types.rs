use serde::{Deserialize, Serialize};

/// Languages tfq can run test suites for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Javascript,
  Typescript,
  Python,
  Rust,
}

impl Language {
  pub fn as_str(&self) -> &'static str {
    match self {
      Language::Javascript => "javascript",
      Language::Typescript => "typescript",
      Language::Python => "python",
      Language::Rust => "rust",
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Language {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "javascript" | "js" => Ok(Language::Javascript),
      "typescript" | "ts" => Ok(Language::Typescript),
      "python" | "py" => Ok(Language::Python),
      "rust" | "rs" => Ok(Language::Rust),
      _ => Err(format!("Unknown language: {}", s)),
    }
  }
}

/// Test frameworks tfq knows how to invoke and whose output it can parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
  Jest,
  Vitest,
  Mocha,
  Pytest,
  Cargo,
}

impl Framework {
  pub fn as_str(&self) -> &'static str {
    match self {
      Framework::Jest => "jest",
      Framework::Vitest => "vitest",
      Framework::Mocha => "mocha",
      Framework::Pytest => "pytest",
      Framework::Cargo => "cargo",
    }
  }

  /// Languages this framework can serve, primary language first
  pub fn languages(&self) -> &'static [Language] {
    match self {
      Framework::Jest | Framework::Vitest | Framework::Mocha => &[Language::Javascript, Language::Typescript],
      Framework::Pytest => &[Language::Python],
      Framework::Cargo => &[Language::Rust],
    }
  }

  pub fn supports(&self, language: Language) -> bool {
    self.languages().contains(&language)
  }

  /// The language assumed when only the framework is known
  pub fn primary_language(&self) -> Language {
    self.languages()[0]
  }

  /// Fallback framework when detection finds a language but no framework markers
  pub fn default_for(language: Language) -> Framework {
    match language {
      Language::Javascript | Language::Typescript => Framework::Jest,
      Language::Python => Framework::Pytest,
      Language::Rust => Framework::Cargo,
    }
  }
}

impl std::fmt::Display for Framework {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Framework {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "jest" => Ok(Framework::Jest),
      "vitest" => Ok(Framework::Vitest),
      "mocha" => Ok(Framework::Mocha),
      "pytest" => Ok(Framework::Pytest),
      "cargo" | "cargo-test" => Ok(Framework::Cargo),
      _ => Err(format!("Unknown framework: {}", s)),
    }
  }
}

/// Result of running a project's test suite.
///
/// This is the boundary contract consumers of the `tfq run` command see,
/// serialized with camelCase field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
  /// True iff the suite exited zero and no failures were parsed
  pub success: bool,
  /// Exit code of the test command (-1 when terminated by a signal)
  pub exit_code: i32,
  /// Number of failed test cases reported by the framework
  pub total_failures: usize,
  /// Framework-native identifiers of the failing tests, first-seen order
  pub failing_tests: Vec<String>,
  pub language: Language,
  pub framework: Framework,
  /// The exact command line that was executed
  pub command: String,
}
