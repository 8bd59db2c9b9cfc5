//! Running the build tool.

use std::io;

use tokio::process::Command;
use tracing::{debug, info};

use crate::build::{BuildCommand, BuildOutcome};
use crate::error::DeployError;

/// Run the build tool and wait for it to exit.
///
/// Standard input, output and error are inherited, so the tool's output goes
/// straight to the console. A non-zero exit is reported in the returned
/// [`BuildOutcome`], not as an error; deciding what to do with it is up to the
/// caller.
///
/// # Errors
///
/// Returns [`DeployError::BuildToolNotFound`] if the program cannot be found
/// and [`DeployError::BuildSpawn`] for any other spawn or wait failure. The
/// working directory must already exist; a missing one is indistinguishable
/// from a missing program at spawn time.
pub async fn run_build(command: &BuildCommand) -> Result<BuildOutcome, DeployError> {
  info!(command = %command, "running build");

  let mut cmd = Command::new(&command.program);
  cmd.args(command.args());
  if let Some(dir) = &command.working_dir {
    cmd.current_dir(dir);
  }

  debug!(program = %command.program.display(), working_dir = ?command.working_dir, "spawning build tool");

  let status = cmd.status().await.map_err(|source| match source.kind() {
    io::ErrorKind::NotFound => DeployError::BuildToolNotFound {
      program: command.program.clone(),
    },
    _ => DeployError::BuildSpawn {
      program: command.program.clone(),
      source,
    },
  })?;

  let outcome = BuildOutcome::from(status);
  debug!(success = outcome.success, code = ?outcome.code, "build tool exited");

  Ok(outcome)
}
