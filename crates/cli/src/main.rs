use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use artship_lib::consts::{BUILD_TOOL_ENV, DEFAULT_BUILD_TOOL};

mod cmd;
mod output;

use cmd::{DeployArgs, cmd_deploy};
use output::{OutputFormat, print_error};

/// artship - build a project and ship the artifact
#[derive(Parser)]
#[command(name = "artship")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Arguments are positional, in one of two shapes:\n  \
  artship <BUILD_TYPE> <SOURCE_PATH> <TARGET_PATH>\n  \
  artship <SOURCE_DIR> <BUILD_TYPE> <SOURCE_PATH> <TARGET_PATH>\n\n\
  Only a BUILD_TYPE of exactly \"release\" adds --release to the build.")]
struct Cli {
  /// [SOURCE_DIR] BUILD_TYPE SOURCE_PATH TARGET_PATH
  #[arg(value_name = "ARGS", num_args = 3..=4, required = true)]
  args: Vec<OsString>,

  /// Program invoked as the build tool
  #[arg(long, env = BUILD_TOOL_ENV, default_value = DEFAULT_BUILD_TOOL)]
  build_tool: PathBuf,

  /// Abort without copying if the build tool exits unsuccessfully
  #[arg(long)]
  strict: bool,

  /// Summary format
  #[arg(short, long, value_enum, default_value_t)]
  output: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  if let Err(err) = run() {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("artship=debug,artship_lib=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let args = DeployArgs::from_positional(cli.args)?;
  cmd_deploy(args, cli.build_tool, cli.strict, cli.output)
}
