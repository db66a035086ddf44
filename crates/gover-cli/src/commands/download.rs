//! The download command: fetch a prebuilt binary package.

use gover_core::Result;
use gover_toolchain::{dlindex, Reference};
use gover_ui::Output;

pub async fn run(version: &str, output: &Output) -> Result<i32> {
    let Some(reference) = Reference::parse(version) else {
        output.error(&format!("{:?} does not look like a Go version", version));
        output.info("Versions look like 1.8beta1 or go1.8beta1.");
        return Ok(2);
    };

    let path = dlindex::download(&reference).await?;
    output.info(&format!("download ready: {}", path.display()));
    Ok(0)
}
