//! Copying the built artifact to its destination.
//!
//! Semantics follow a plain `cp source target`: an existing file at the
//! destination is overwritten, an existing directory receives the file under
//! the source's base name, and permission bits travel with the content.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::error::DeployError;

/// Where an artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedArtifact {
  pub destination: PathBuf,
  pub bytes: u64,
}

/// Copy `source` to `target`.
///
/// The source is checked before the destination is touched, so a missing
/// source never creates or truncates the target.
///
/// # Errors
///
/// - [`DeployError::SourceNotFound`] if the source does not exist
/// - [`DeployError::SourceNotAFile`] if the source is a directory or has no file name
/// - [`DeployError::SameFile`] if source and destination resolve to the same file
/// - [`DeployError::Copy`] for any other I/O failure
pub async fn copy_artifact(source: &Path, target: &Path) -> Result<CopiedArtifact, DeployError> {
  let metadata = fs::metadata(source).await.map_err(|e| match e.kind() {
    io::ErrorKind::NotFound => DeployError::SourceNotFound {
      path: source.to_path_buf(),
    },
    _ => copy_error(source, target, e),
  })?;

  if metadata.is_dir() {
    return Err(DeployError::SourceNotAFile {
      path: source.to_path_buf(),
    });
  }

  let destination = resolve_destination(source, target).await?;
  debug!(source = %source.display(), destination = %destination.display(), "resolved copy destination");

  if is_same_file(source, &destination) {
    return Err(DeployError::SameFile { path: destination });
  }

  let bytes = fs::copy(source, &destination)
    .await
    .map_err(|e| copy_error(source, &destination, e))?;

  info!(destination = %destination.display(), bytes, "artifact copied");

  Ok(CopiedArtifact { destination, bytes })
}

/// Final path of the copy: `target/<file name>` when `target` is an existing
/// directory, otherwise `target` itself.
pub async fn resolve_destination(source: &Path, target: &Path) -> Result<PathBuf, DeployError> {
  match fs::metadata(target).await {
    Ok(metadata) if metadata.is_dir() => {
      let name = source.file_name().ok_or_else(|| DeployError::SourceNotAFile {
        path: source.to_path_buf(),
      })?;
      Ok(target.join(name))
    }
    _ => Ok(target.to_path_buf()),
  }
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
  match (dunce::canonicalize(source), dunce::canonicalize(destination)) {
    (Ok(a), Ok(b)) => a == b,
    _ => false,
  }
}

fn copy_error(from: &Path, to: &Path, source: io::Error) -> DeployError {
  DeployError::Copy {
    from: from.to_path_buf(),
    to: to.to_path_buf(),
    source,
  }
}
