//! Language and test framework detection for tfq
//!
//! This crate inspects a project directory for marker files and decides:
//! - which language the project's tests are written in
//! - which test framework should be invoked to run them
//!
//! # Example
//! ```ignore
//! use detect::{DetectOptions, detect};
//!
//! let (language, framework) = detect(project_root, &DetectOptions::default())?;
//! ```

mod detector;
mod error;
mod languages;

pub use detector::{DetectOptions, detect, detect_framework, detect_language};
pub use error::DetectError;

// Re-export for convenience
pub use tfq_core::{Framework, Language};
