//! Implementation of the build-and-deploy run.
//!
//! Runs the build tool, then copies the artifact, and prints a summary.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::debug;

use artship_lib::build::{BuildType, exit_label};
use artship_lib::deploy::{DeployOptions, DeployResult, deploy};

use crate::output::{
  OutputFormat, format_bytes, format_duration, print_json, print_stat, print_success, print_warning, symbols,
};

/// Positional arguments, after picking the variant from their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployArgs {
  pub source_dir: Option<PathBuf>,
  pub build_type: BuildType,
  pub source_path: PathBuf,
  pub target_path: PathBuf,
}

impl DeployArgs {
  /// Accepts `BUILD_TYPE SOURCE TARGET` or `SOURCE_DIR BUILD_TYPE SOURCE TARGET`.
  pub fn from_positional(args: Vec<OsString>) -> Result<Self> {
    let (source_dir, rest) = match args.len() {
      3 => (None, args),
      4 => {
        let mut args = args.into_iter();
        let dir = args.next().map(PathBuf::from);
        (dir, args.collect())
      }
      n => bail!("expected 3 or 4 arguments, got {}", n),
    };

    let [build_type, source_path, target_path]: [OsString; 3] = rest
      .try_into()
      .map_err(|_| anyhow::anyhow!("expected build type, source path and target path"))?;

    // A build type that is not valid UTF-8 cannot be "release".
    let build_type = build_type.to_str().map(BuildType::from_arg).unwrap_or_default();

    Ok(Self {
      source_dir,
      build_type,
      source_path: PathBuf::from(source_path),
      target_path: PathBuf::from(target_path),
    })
  }

  fn into_options(self, build_tool: PathBuf, strict: bool) -> DeployOptions {
    let mut options = DeployOptions::new(self.build_type, self.source_path, self.target_path)
      .with_build_tool(build_tool)
      .with_strict(strict);
    if let Some(dir) = self.source_dir {
      options = options.with_source_dir(dir);
    }
    options
  }
}

/// Execute a build-and-deploy run.
///
/// The build runs on a single-threaded runtime and blocks until the build tool
/// exits. A failed build is reported as a warning unless `strict` is set.
pub fn cmd_deploy(args: DeployArgs, build_tool: PathBuf, strict: bool, output: OutputFormat) -> Result<()> {
  let start = Instant::now();
  let options = args.into_options(build_tool, strict);
  debug!(?options, "deploy options");

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  let result = rt.block_on(deploy(&options)).context("Deploy failed")?;

  if output.is_json() {
    print_json(&result)?;
  } else {
    print_summary(&result, start);
  }

  Ok(())
}

fn print_summary(result: &DeployResult, start: Instant) {
  println!();
  if !result.build.success {
    print_warning(&format!(
      "Build failed ({}), shipped the existing artifact",
      exit_label(result.build.code)
    ));
  }
  print_success(&format!(
    "Deployed {} {} {}",
    result.source.display(),
    symbols::ARROW,
    result.destination.display()
  ));
  print_stat("Build", result.build_type.as_str());
  print_stat("Size", &format_bytes(result.bytes));
  print_stat("Duration", &format_duration(start.elapsed()));
}
