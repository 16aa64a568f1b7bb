//! CLI command implementations

mod run;

pub use run::cmd_run;
