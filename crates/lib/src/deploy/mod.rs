//! Build-and-deploy orchestration.
//!
//! A run is strictly sequential:
//! 1. Check the source directory, if one was given
//! 2. Run the build tool in that directory
//! 3. Copy the artifact to its destination
//!
//! The process working directory is never changed. The source directory is
//! passed to the build tool explicitly and used as the base for relative paths.

mod types;

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

pub use types::*;

use crate::build::{BuildCommand, run_build};
use crate::copy::copy_artifact;
use crate::error::DeployError;

/// Build the project and copy the artifact.
///
/// A build tool that exits unsuccessfully does not stop the copy unless
/// `options.strict` is set; the previously built artifact, if any, is shipped
/// and a warning is logged.
///
/// # Errors
///
/// Fails before the build if the source directory is unusable, and otherwise
/// with whatever [`run_build`] or [`copy_artifact`] reports. In strict mode a
/// failed build returns [`DeployError::BuildFailed`] and nothing is copied.
pub async fn deploy(options: &DeployOptions) -> Result<DeployResult, DeployError> {
  let mut command = BuildCommand::new(&options.build_tool, options.build_type);

  if let Some(dir) = &options.source_dir {
    check_source_dir(dir).await?;
    command = command.with_working_dir(dir);
  }

  let build = run_build(&command).await?;

  if !build.success {
    if options.strict {
      return Err(DeployError::BuildFailed {
        command: command.to_string(),
        code: build.code,
      });
    }
    warn!(
      command = %command,
      code = ?build.code,
      "build tool exited unsuccessfully, copying artifact anyway"
    );
  }

  let source = resolve_path(options.source_dir.as_deref(), &options.source_path);
  let target = resolve_path(options.source_dir.as_deref(), &options.target_path);
  debug!(source = %source.display(), target = %target.display(), "resolved artifact paths");

  let copied = copy_artifact(&source, &target).await?;

  info!(
    build_type = %options.build_type,
    destination = %copied.destination.display(),
    "deploy complete"
  );

  Ok(DeployResult {
    build_type: options.build_type,
    build,
    source,
    destination: copied.destination,
    bytes: copied.bytes,
  })
}

/// Resolve `path` against `base` when it is relative.
pub fn resolve_path(base: Option<&Path>, path: &Path) -> PathBuf {
  match base {
    Some(base) if path.is_relative() => base.join(path),
    _ => path.to_path_buf(),
  }
}

async fn check_source_dir(dir: &Path) -> Result<(), DeployError> {
  let metadata = fs::metadata(dir)
    .await
    .map_err(|source| DeployError::SourceDirUnavailable {
      path: dir.to_path_buf(),
      source,
    })?;

  if !metadata.is_dir() {
    return Err(DeployError::NotADirectory {
      path: dir.to_path_buf(),
    });
  }

  // The directory must be enterable, not just present.
  fs::read_dir(dir)
    .await
    .map_err(|source| DeployError::SourceDirUnavailable {
      path: dir.to_path_buf(),
      source,
    })?;

  Ok(())
}
