//! On-disk layout of the mirror and version snapshots.
//!
//! Everything gover persists lives under a single parent directory derived
//! from the host Go toolchain's GOPATH: `<gopath[0]>/src/golang.org/x`.
//! The parent holds the bare mirror (`go.mirror`) and one snapshot
//! directory per installed reference.

use gover_core::{CommandRunner, Error, Result};
use std::path::{Path, PathBuf};

/// Directory name of the bare mirror under the parent directory.
pub const MIRROR_DIR: &str = "go.mirror";

/// Determine the parent directory of the mirror and snapshots.
///
/// Asks the host `go` binary for its GOPATH and uses the first list element.
pub async fn repo_parent(runner: &CommandRunner) -> Result<PathBuf> {
    let output = runner.run("go", ["env", "GOPATH"]).await?;
    if !output.success() {
        return Err(Error::CommandFailed {
            command: "go env GOPATH".into(),
            exit_code: Some(output.exit_code),
            stdout: output.stdout,
            stderr: output.stderr,
            fixes: vec![],
        });
    }

    let gopath = output.stdout.trim().to_string();
    let first = std::env::split_paths(&gopath)
        .find(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("could not determine repo path: could not parse GOPATH={:?}", gopath)
        })?;

    Ok(first.join("src").join("golang.org").join("x"))
}

/// Name of the tool binary on this platform.
pub fn go_binary_name() -> &'static str {
    if cfg!(windows) { "go.exe" } else { "go" }
}

/// The snapshot directory for a reference.
pub fn snapshot_dir(parent: &Path, reference: &str) -> PathBuf {
    parent.join(reference)
}

/// The expected tool binary path inside a snapshot.
pub fn go_binary(parent: &Path, reference: &str) -> PathBuf {
    snapshot_dir(parent, reference)
        .join("bin")
        .join(go_binary_name())
}

/// Whether a reference has a built tool binary.
///
/// Binary presence is the sole "installed" signal; there is no separate
/// marker distinguishing a built snapshot from an exported-only one.
pub fn is_installed(parent: &Path, reference: &str) -> bool {
    go_binary(parent, reference).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_go_binary_path() {
        let path = go_binary(Path::new("/x"), "go1.8");
        if cfg!(windows) {
            assert!(path.ends_with("go1.8/bin/go.exe"));
        } else {
            assert!(path.ends_with("go1.8/bin/go"));
        }
    }

    #[test]
    fn test_is_installed() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path();
        assert!(!is_installed(parent, "go1.8"));

        let bin = parent.join("go1.8").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(go_binary_name()), b"fake").unwrap();
        assert!(is_installed(parent, "go1.8"));
    }
}
