//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment with a stub build tool.
///
/// The stub records its arguments and working directory, then exits with the
/// status given at construction.
pub struct TestEnv {
  pub temp: TempDir,
  pub build_tool: PathBuf,
  args_log: PathBuf,
  cwd_log: PathBuf,
}

impl TestEnv {
  /// Create an environment whose build tool succeeds.
  pub fn new() -> Self {
    Self::with_build_exit(0)
  }

  /// Create an environment whose build tool exits with `code`.
  pub fn with_build_exit(code: i32) -> Self {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let tools = temp.path().join("tools");
    std::fs::create_dir_all(&tools).unwrap();

    let build_tool = tools.join("build-tool");
    let args_log = tools.join("args.log");
    let cwd_log = tools.join("cwd.log");
    let script = format!(
      "#!/bin/sh\nprintf '%s\\n' \"$*\" > '{}'\npwd -P > '{}'\nexit {}\n",
      args_log.display(),
      cwd_log.display(),
      code
    );
    std::fs::write(&build_tool, script).unwrap();
    std::fs::set_permissions(&build_tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    Self {
      temp,
      build_tool,
      args_log,
      cwd_log,
    }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// Write a file relative to the temp directory, creating parents.
  pub fn write_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Create a directory relative to the temp directory.
  pub fn create_dir(&self, relative_path: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    std::fs::create_dir_all(&path).unwrap();
    path
  }

  pub fn build_invoked(&self) -> bool {
    self.args_log.exists()
  }

  /// Arguments the stub build tool was last called with.
  pub fn build_args(&self) -> String {
    std::fs::read_to_string(&self.args_log).unwrap().trim_end().to_string()
  }

  /// Working directory the stub build tool last ran in.
  pub fn build_cwd(&self) -> PathBuf {
    PathBuf::from(std::fs::read_to_string(&self.cwd_log).unwrap().trim_end())
  }

  /// Canonical form of a path inside the environment, for comparing with
  /// [`TestEnv::build_cwd`].
  pub fn canonical(&self, path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap()
  }

  /// Get a pre-configured Command for the artship binary.
  ///
  /// Points the build tool at the stub through `ARTSHIP_BUILD_TOOL` and runs
  /// from the temp directory.
  pub fn artship_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("artship");
    cmd.env("ARTSHIP_BUILD_TOOL", &self.build_tool);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(self.temp.path());
    cmd
  }
}
