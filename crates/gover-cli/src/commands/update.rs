//! Mirror maintenance commands, useful during testing.

use gover_core::{CommandRunner, Result};
use gover_toolchain::repo::MirrorAction;
use gover_toolchain::{export, layout, InstallLock, Mirror};
use gover_ui::Output;

/// Clone or update the Go repo mirror.
pub async fn run(output: &Output) -> Result<i32> {
    let runner = CommandRunner::new();
    let parent = layout::repo_parent(&runner).await?;
    let _lock = InstallLock::acquire(&parent)?;

    let mirror = Mirror::new(&parent);
    match mirror.ensure().await? {
        MirrorAction::Cloned => output.status("Cloned", &mirror.path().display().to_string()),
        MirrorAction::Updated => output.status("Updated", &mirror.path().display().to_string()),
    }
    Ok(0)
}

/// Update the mirror and export a source snapshot without building it.
///
/// Takes a raw git reference, not a normalized version, so branches and
/// commit hashes work too.
pub async fn export(reference: &str, output: &Output) -> Result<i32> {
    let runner = CommandRunner::new();
    let parent = layout::repo_parent(&runner).await?;
    let _lock = InstallLock::acquire(&parent)?;

    let mirror = Mirror::new(&parent);
    mirror.ensure().await?;
    export::export(&parent, &mirror, reference).await?;

    output.status(
        "Exported",
        &layout::snapshot_dir(&parent, reference).display().to_string(),
    );
    Ok(0)
}
