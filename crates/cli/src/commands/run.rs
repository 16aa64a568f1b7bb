//! Run command: resolve language/framework, execute the suite, report

use std::path::PathBuf;

use anyhow::{Result, bail};
use detect::{DetectOptions, detect};
use runner::{RunSpec, run};
use tfq_core::{Config, Framework, Language, RunResult};
use tracing::debug;

/// Run the project's test suite and print the result.
///
/// The process exit code mirrors the suite: 0 on success, otherwise the
/// suite's own exit code (clamped to 1 for signal-terminated children).
pub async fn cmd_run(
  root: PathBuf,
  language: Option<&str>,
  framework: Option<&str>,
  auto_detect: bool,
  json: bool,
) -> Result<()> {
  let config = Config::load_for_project(&root);

  // Flags win over config defaults; --auto-detect ignores config defaults
  let config_language = if auto_detect { None } else { config.defaults.language.as_deref() };
  let config_framework = if auto_detect { None } else { config.defaults.framework.as_deref() };

  let opts = DetectOptions {
    language: resolve_choice::<Language>(language, config_language)?,
    framework: resolve_choice::<Framework>(framework, config_framework)?,
  };
  let (language, framework) = detect(&root, &opts)?;
  debug!(%language, %framework, root = %root.display(), "Resolved run target");

  let spec = RunSpec {
    root,
    language,
    framework,
    command: None,
    timeout_secs: config.run.timeout_secs,
  };
  let result = run(spec).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&result)?);
  } else {
    print_summary(&result);
  }

  if !result.success {
    std::process::exit(result.exit_code.clamp(1, 255));
  }
  Ok(())
}

/// Parse an explicit flag, falling back to the config default string
fn resolve_choice<T: std::str::FromStr<Err = String>>(
  flag: Option<&str>,
  config_default: Option<&str>,
) -> Result<Option<T>> {
  let Some(value) = flag.or(config_default) else {
    return Ok(None);
  };
  match value.parse::<T>() {
    Ok(parsed) => Ok(Some(parsed)),
    Err(message) => bail!(message),
  }
}

fn print_summary(result: &RunResult) {
  println!("Language:  {}", result.language);
  println!("Framework: {}", result.framework);
  println!("Command:   {}", result.command);
  println!();

  if result.success {
    println!("All tests passed.");
    return;
  }

  println!("{} failing test(s), exit code {}:", result.total_failures, result.exit_code);
  for test in &result.failing_tests {
    println!("  {}", test);
  }
}
