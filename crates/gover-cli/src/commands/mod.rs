//! Command implementations.

mod completions;
mod download;
mod install;
mod list;
mod run;
mod update;

use crate::cli::{Cli, Commands};
use gover_core::Result;
use gover_ui::{Output, Verbosity};

/// Run the CLI command.
pub async fn run(cli: Cli) -> Result<i32> {
    let output = Output::with_verbosity(if cli.global.verbose {
        Verbosity::Verbose
    } else if cli.global.quiet > 0 {
        Verbosity::Quiet
    } else {
        Verbosity::Normal
    });

    match cli.command {
        Commands::List => list::known(&output).await,
        Commands::Listdl => list::downloadable(&output).await,
        Commands::Install { version } => install::run(&version, &output).await,
        Commands::Update => update::run(&output).await,
        Commands::Export { reference } => update::export(&reference, &output).await,
        Commands::Download { version } => download::run(&version, &output).await,
        Commands::Completions { shell } => completions::run(shell),
        Commands::Run(args) => run::run(args, &output).await,
    }
}
