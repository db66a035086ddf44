//! Delegation to an installed Go version: `gover <version> <args>`.

use gover_core::{CommandRunner, Error, Fix, Result};
use gover_toolchain::{layout, Reference};
use gover_ui::Output;
use std::ffi::OsStr;

pub async fn run(args: Vec<String>, output: &Output) -> Result<i32> {
    // external_subcommand guarantees at least the version token.
    let Some((raw, go_args)) = args.split_first() else {
        return Ok(2);
    };

    let Some(reference) = Reference::parse(raw) else {
        output.error(&format!("{:?} does not look like a Go version", raw));
        output.info("Versions look like 1.8beta1 or go1.8beta1.");
        return Ok(2);
    };

    let runner = CommandRunner::new();
    let parent = layout::repo_parent(&runner).await?;

    let gobin = layout::go_binary(&parent, reference.as_str());
    if !gobin.exists() {
        return Err(Error::NotInstalled {
            reference: reference.as_str().to_string(),
            path: gobin,
            fixes: vec![Fix::with_command(
                format!("Install {}", reference),
                format!("gover install {}", reference),
            )],
        });
    }

    let code = runner
        .run_interactive(gobin.as_os_str(), go_args.iter().map(OsStr::new))
        .await?;

    Ok(if code == 0 { 0 } else { 1 })
}
