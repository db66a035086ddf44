//! Install orchestration: mirror, bootstrap, export, build.

use crate::build;
use crate::export;
use crate::layout;
use crate::lock::InstallLock;
use crate::repo::{Mirror, BOOTSTRAP_REF};
use crate::version::Reference;
use gover_core::{CommandRunner, Result};
use gover_ui::Output;
use std::path::Path;
use tracing::info;

/// Whether the bootstrap toolchain still needs to be built.
///
/// Newer Go versions require an existing Go to compile themselves; the
/// pinned bootstrap branch fills that role and is built once, lazily.
pub fn needs_bootstrap(parent: &Path) -> bool {
    !layout::is_installed(parent, BOOTSTRAP_REF)
}

/// Install a version: update the mirror, build the bootstrap toolchain if
/// absent, then export and build the requested reference.
///
/// Every step runs under the advisory install lock, so concurrent installs
/// queue up rather than corrupt the mirror or each other's snapshots.
pub async fn install(output: &Output, reference: &Reference) -> Result<()> {
    let runner = CommandRunner::new();
    let parent = layout::repo_parent(&runner).await?;

    let _lock = InstallLock::acquire(&parent)?;

    let mirror = Mirror::new(&parent);
    mirror.ensure().await?;

    if needs_bootstrap(&parent) {
        info!("building bootstrap toolchain");
        output.status("Bootstrap", &format!("building {} first", BOOTSTRAP_REF));
        export::export(&parent, &mirror, BOOTSTRAP_REF).await?;
        build::build(&parent, BOOTSTRAP_REF, None).await?;
    }

    export::export(&parent, &mirror, reference.as_str()).await?;
    build::build(
        &parent,
        reference.as_str(),
        Some(&parent.join(BOOTSTRAP_REF)),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_needs_bootstrap() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path();
        assert!(needs_bootstrap(parent));

        let bin = parent.join(BOOTSTRAP_REF).join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(layout::go_binary_name()), b"fake").unwrap();
        assert!(!needs_bootstrap(parent));
    }
}
