//! Test utilities for artship-lib.
//!
//! Provides a stub build tool that records how it was invoked, so tests can
//! check the arguments and working directory without running a real build.

use std::path::{Path, PathBuf};

/// A shell script standing in for the build tool.
///
/// On each run it writes its arguments and physical working directory to log
/// files next to the script, then exits with a fixed status.
#[cfg(unix)]
pub struct StubBuildTool {
  pub program: PathBuf,
  args_log: PathBuf,
  cwd_log: PathBuf,
}

#[cfg(unix)]
impl StubBuildTool {
  /// Write the stub into `dir`. It exits with `exit_code` when run.
  pub fn install(dir: &Path, exit_code: i32) -> Self {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("stub-build-tool");
    let args_log = dir.join("stub-args.log");
    let cwd_log = dir.join("stub-cwd.log");

    let script = format!(
      "#!/bin/sh\nprintf '%s\\n' \"$*\" > '{}'\npwd -P > '{}'\nexit {}\n",
      args_log.display(),
      cwd_log.display(),
      exit_code
    );
    std::fs::write(&program, script).unwrap();
    std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

    Self {
      program,
      args_log,
      cwd_log,
    }
  }

  pub fn was_invoked(&self) -> bool {
    self.args_log.exists()
  }

  /// Arguments from the last run, space separated.
  pub fn recorded_args(&self) -> String {
    std::fs::read_to_string(&self.args_log).unwrap().trim_end().to_string()
  }

  /// Working directory of the last run, with symlinks resolved.
  pub fn recorded_cwd(&self) -> PathBuf {
    PathBuf::from(std::fs::read_to_string(&self.cwd_log).unwrap().trim_end())
  }
}

/// Path to a program that does not exist anywhere.
pub fn missing_program() -> PathBuf {
  PathBuf::from("artship-test-no-such-build-tool")
}
