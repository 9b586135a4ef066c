//! Command line interface of the `sso` binary

use clap::Parser;
use std::path::PathBuf;

/// Single sign-on authentication service
#[derive(Debug, Parser)]
#[command(name = "sso", version, about)]
pub struct Cli {
    /// Path to the configuration file (TOML, YAML or JSON)
    ///
    /// The flag takes precedence over the environment variable.
    #[arg(long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}
