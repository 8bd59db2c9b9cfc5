/// Build tool invoked when none is configured.
pub const DEFAULT_BUILD_TOOL: &str = "cargo";

/// Environment variable overriding the build tool.
pub const BUILD_TOOL_ENV: &str = "ARTSHIP_BUILD_TOOL";

pub const BUILD_SUBCOMMAND: &str = "build";
pub const RELEASE_FLAG: &str = "--release";

/// The only build-type argument that selects a release build.
pub const RELEASE_BUILD_TYPE: &str = "release";
