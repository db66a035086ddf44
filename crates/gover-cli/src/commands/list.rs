//! Version listings.

use gover_core::Result;
use gover_toolchain::{dlindex, repo};
use gover_ui::Output;

/// List every known Go version from the upstream tags.
pub async fn known(output: &Output) -> Result<i32> {
    for tag in repo::list_tags().await? {
        output.result_line(&tag);
    }
    Ok(0)
}

/// List versions with a prebuilt binary for this machine.
pub async fn downloadable(output: &Output) -> Result<i32> {
    for version in dlindex::list_downloadable().await? {
        output.result_line(&version);
    }
    Ok(0)
}
