use tfq_core::Framework;

/// The command line used to run a framework's test suite.
///
/// The exact string is echoed back in the run result so callers can see what
/// was executed.
pub fn command_for(framework: Framework) -> &'static str {
  match framework {
    Framework::Jest => "npx jest --colors=false",
    Framework::Vitest => "npx vitest run",
    Framework::Mocha => "npx mocha --reporter spec",
    Framework::Pytest => "python -m pytest -v",
    Framework::Cargo => "cargo test",
  }
}
