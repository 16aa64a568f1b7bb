//! Shared types and configuration for tfq.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! which languages and test frameworks are supported, the result object a
//! test run produces, and the TOML configuration layer with per-project
//! overrides.

mod config;
mod types;

pub use config::{Config, DefaultsConfig, RunConfig};
pub use types::{Framework, Language, RunResult};
