mod deploy;

pub use deploy::{DeployArgs, cmd_deploy};
