//! Errors for a build-and-deploy run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::build::exit_label;

/// Errors that abort a deploy.
///
/// A build tool that runs and exits non-zero is only an error in strict mode;
/// see [`crate::deploy::DeployOptions::strict`].
#[derive(Debug, Error)]
pub enum DeployError {
  /// The source directory could not be accessed.
  #[error("cannot access source directory {}", .path.display())]
  SourceDirUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The source directory exists but is not a directory.
  #[error("source directory is not a directory: {}", .path.display())]
  NotADirectory { path: PathBuf },

  /// The build tool is not on the execution path.
  #[error("build tool not found: {}", .program.display())]
  BuildToolNotFound { program: PathBuf },

  /// The build tool could not be spawned or waited on.
  #[error("failed to run build tool {}", .program.display())]
  BuildSpawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The build tool exited unsuccessfully (strict mode only).
  #[error("build failed ({}): {command}", code_label(.code))]
  BuildFailed { command: String, code: Option<i32> },

  /// The artifact to copy does not exist.
  #[error("source artifact not found: {}", .path.display())]
  SourceNotFound { path: PathBuf },

  /// The artifact to copy is a directory or has no file name.
  #[error("source artifact is not a file: {}", .path.display())]
  SourceNotAFile { path: PathBuf },

  /// Copying would overwrite the source with itself.
  #[error("source and destination are the same file: {}", .path.display())]
  SameFile { path: PathBuf },

  /// Any other I/O failure while copying.
  #[error("failed to copy {} to {}", .from.display(), .to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },
}

fn code_label(code: &Option<i32>) -> String {
  exit_label(*code)
}
