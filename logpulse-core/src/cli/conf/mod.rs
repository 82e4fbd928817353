mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to config file
        #[arg(default_value = "logpulse.toml")]
        path: PathBuf,
    },

    /// Print resolved configuration
    Dump {
        #[arg(default_value = "logpulse.toml")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter config file
    Init {
        /// Path to config file
        #[arg(default_value = "logpulse.toml")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, yaml, .. } => dump(path, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
