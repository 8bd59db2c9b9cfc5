//! Build invocation.
//!
//! A build is a single call to the external build tool, `<tool> build`, with
//! `--release` appended for release builds. The tool is opaque: its output
//! streams straight to the console and only its exit status is observed.
//!
//! # Submodules
//!
//! - [`execute`] - Spawning the build tool and waiting on it

pub mod execute;
mod types;

pub use execute::run_build;
pub use types::*;
