//! CLI argument parsing.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use gover_core::EnvVars;

use crate::styles::STYLES;

/// gover - install and use multiple Go versions
#[derive(Parser, Debug)]
#[command(name = "gover")]
#[command(author, version, about = "A tool to install and use multiple Go versions")]
#[command(long_about = None)]
#[command(styles = STYLES)]
#[command(after_help = "Examples:

    gover install 1.8beta1
    gover 1.8beta1 test ./...
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true, env = EnvVars::GOVER_VERBOSE)]
    pub verbose: bool,

    /// Suppress output (use twice for complete silence)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = EnvVars::GOVER_QUIET)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true, env = EnvVars::GOVER_NO_COLOR)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known Go versions
    List,

    /// List Go versions with a prebuilt binary for this machine
    Listdl,

    /// Install a Go version
    Install {
        /// Version to install (e.g. 1.8beta1 or go1.8beta1)
        version: String,
    },

    /// Clone or update the Go repo mirror
    #[command(hide = true)]
    Update,

    /// Export a source snapshot without building it
    #[command(hide = true)]
    Export {
        /// Git reference to export
        reference: String,
    },

    /// Download the prebuilt binary package for a version
    #[command(hide = true)]
    Download {
        /// Version to download (e.g. 1.8 or go1.8)
        version: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Run 'go <args>' using a given Go version
    #[command(external_subcommand)]
    Run(Vec<String>),
}
