use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use serde::Serialize;

use crate::consts::{BUILD_SUBCOMMAND, DEFAULT_BUILD_TOOL, RELEASE_BUILD_TYPE, RELEASE_FLAG};

/// Build profile selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
  Release,
  #[default]
  Debug,
}

impl BuildType {
  /// Parse a free-form build-type argument.
  ///
  /// Only the exact string `"release"` selects a release build. Anything else,
  /// including `"Release"` or an empty string, is a debug build.
  pub fn from_arg(value: &str) -> Self {
    if value == RELEASE_BUILD_TYPE {
      BuildType::Release
    } else {
      BuildType::Debug
    }
  }

  pub fn is_release(self) -> bool {
    matches!(self, BuildType::Release)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      BuildType::Release => "release",
      BuildType::Debug => "debug",
    }
  }
}

impl From<&str> for BuildType {
  fn from(value: &str) -> Self {
    BuildType::from_arg(value)
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A fully described build tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
  pub program: PathBuf,
  pub build_type: BuildType,
  /// Directory the tool runs in. `None` inherits the caller's working directory.
  pub working_dir: Option<PathBuf>,
}

impl BuildCommand {
  pub fn new(program: impl Into<PathBuf>, build_type: BuildType) -> Self {
    Self {
      program: program.into(),
      build_type,
      working_dir: None,
    }
  }

  pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.working_dir = Some(dir.into());
    self
  }

  /// Arguments passed to the build tool.
  pub fn args(&self) -> Vec<&'static str> {
    let mut args = vec![BUILD_SUBCOMMAND];
    if self.build_type.is_release() {
      args.push(RELEASE_FLAG);
    }
    args
  }
}

impl From<BuildType> for BuildCommand {
  fn from(build_type: BuildType) -> Self {
    BuildCommand::new(DEFAULT_BUILD_TOOL, build_type)
  }
}

impl fmt::Display for BuildCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in self.args() {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// How the build tool exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
  pub success: bool,
  /// Exit code, absent if the tool was killed by a signal.
  pub code: Option<i32>,
}

impl From<ExitStatus> for BuildOutcome {
  fn from(status: ExitStatus) -> Self {
    Self {
      success: status.success(),
      code: status.code(),
    }
  }
}

/// Human-readable exit status: `exit code N`, or `signal` when the tool was
/// killed before it could exit.
pub fn exit_label(code: Option<i32>) -> String {
  match code {
    Some(code) => format!("exit code {}", code),
    None => "signal".to_string(),
  }
}
