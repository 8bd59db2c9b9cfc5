//! artship-lib: build a project with an external build tool and ship one artifact.
//!
//! The crate is split along the two steps of a run:
//! - `build`: build-type parsing, command construction and execution
//! - `copy`: copying the built artifact to its destination
//! - `deploy`: sequencing the two, with optional source directory and strict mode

pub mod build;
pub mod consts;
pub mod copy;
pub mod deploy;
pub mod error;
pub mod util;

pub use error::DeployError;
