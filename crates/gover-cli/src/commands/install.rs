//! The install command.

use gover_core::Result;
use gover_toolchain::Reference;
use gover_ui::Output;

pub async fn run(version: &str, output: &Output) -> Result<i32> {
    let Some(reference) = Reference::parse(version) else {
        output.error(&format!("{:?} does not look like a Go version", version));
        output.info("Versions look like 1.8beta1 or go1.8beta1.");
        return Ok(2);
    };

    gover_toolchain::install(output, &reference).await?;
    output.status("Installed", reference.as_str());
    Ok(0)
}
