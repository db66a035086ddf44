//! gover - install and use multiple Go versions.

use clap::Parser;

mod cli;
mod commands;
mod styles;

use cli::Cli;
use gover_core::ExitCode;
use gover_ui::Output;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    gover_telemetry::init(cli.global.verbose);

    let code = match commands::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            let output = Output::new();
            output.print_error(&e);
            output.flush();
            ExitCode::for_error(e.code()).into()
        }
    };

    std::process::exit(code);
}
