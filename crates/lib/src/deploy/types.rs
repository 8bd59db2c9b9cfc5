use std::path::PathBuf;

use serde::Serialize;

use crate::build::{BuildOutcome, BuildType};
use crate::consts::DEFAULT_BUILD_TOOL;

/// Options for a single build-and-deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
  pub build_type: BuildType,
  /// Directory to build in. Relative `source_path` and `target_path` are
  /// resolved against it.
  pub source_dir: Option<PathBuf>,
  pub source_path: PathBuf,
  pub target_path: PathBuf,
  /// Program invoked as the build tool.
  pub build_tool: PathBuf,
  /// Abort instead of copying when the build tool exits unsuccessfully.
  pub strict: bool,
}

impl DeployOptions {
  pub fn new(build_type: BuildType, source_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
    Self {
      build_type,
      source_dir: None,
      source_path: source_path.into(),
      target_path: target_path.into(),
      build_tool: PathBuf::from(DEFAULT_BUILD_TOOL),
      strict: false,
    }
  }

  pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.source_dir = Some(dir.into());
    self
  }

  pub fn with_build_tool(mut self, program: impl Into<PathBuf>) -> Self {
    self.build_tool = program.into();
    self
  }

  pub fn with_strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployResult {
  pub build_type: BuildType,
  pub build: BuildOutcome,
  pub source: PathBuf,
  pub destination: PathBuf,
  pub bytes: u64,
}
