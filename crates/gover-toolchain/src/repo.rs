//! Git operations against the upstream Go repository.
//!
//! Git is an external collaborator: this module only shells out for tag
//! listing, mirror clone/fetch, ref resolution, and zip archive generation.

use crate::layout::MIRROR_DIR;
use gover_core::{CommandRunner, Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Upstream Go repository.
pub const REMOTE: &str = "https://go.googlesource.com/go";

/// The bootstrap reference: an older, known-buildable Go that newer
/// versions need to compile themselves.
pub const BOOTSTRAP_REF: &str = "release-branch.go1.4";

/// List tagged Go versions from the remote.
///
/// Each `git ls-remote` line must split into exactly two fields (hash and
/// ref path); the `refs/tags/` prefix is stripped. The remote is
/// authoritative, so there are no retries.
pub async fn list_tags() -> Result<Vec<String>> {
    let runner = CommandRunner::new();
    let output = runner
        .run_checked("git", ["ls-remote", "--tags", REMOTE, "go1*"])
        .await?;
    parse_ls_remote(&output.stdout)
}

fn parse_ls_remote(text: &str) -> Result<Vec<String>> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(parse_ls_remote_line)
        .collect()
}

fn parse_ls_remote_line(line: &str) -> Result<String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(anyhow::anyhow!("unexpected git ls-remote line {:?}", line).into());
    }
    Ok(fields[1].trim_start_matches("refs/tags/").to_string())
}

/// What [`Mirror::ensure`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAction {
    Cloned,
    Updated,
}

/// The single local bare mirror of the upstream Go repository.
///
/// Cloned once on first use, fetched on every subsequent use, never deleted.
#[derive(Debug, Clone)]
pub struct Mirror {
    path: PathBuf,
}

impl Mirror {
    /// The mirror under a parent directory.
    pub fn new(parent: &Path) -> Self {
        Self {
            path: parent.join(MIRROR_DIR),
        }
    }

    /// Path of the bare mirror directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clone the mirror if absent, otherwise fetch updates.
    ///
    /// Stdio is inherited so interactive credential prompts reach the
    /// terminal.
    pub async fn ensure(&self) -> Result<MirrorAction> {
        let runner = CommandRunner::new();

        if !self.path.exists() {
            info!("cloning Go repo");
            let args: [&OsStr; 4] = [
                "clone".as_ref(),
                "--bare".as_ref(),
                REMOTE.as_ref(),
                self.path.as_os_str(),
            ];
            let code = runner.run_interactive("git".as_ref(), args).await?;
            if code != 0 {
                return Err(Error::Repo {
                    verb: "clone".into(),
                    source: None,
                });
            }
            Ok(MirrorAction::Cloned)
        } else {
            info!("updating Go repo");
            let runner = runner.with_working_dir(&self.path);
            let code = runner.run_interactive("git", ["fetch"]).await?;
            if code != 0 {
                return Err(Error::Repo {
                    verb: "update".into(),
                    source: None,
                });
            }
            Ok(MirrorAction::Updated)
        }
    }

    /// Confirm that a reference resolves in the mirror.
    ///
    /// Done before any archive work so a bogus reference gets a clear error.
    pub async fn resolve(&self, reference: &str) -> Result<()> {
        let runner = CommandRunner::new().with_working_dir(&self.path);
        let output = runner.run("git", ["rev-parse", reference]).await?;
        if !output.success() {
            return Err(Error::UnresolvedRef {
                reference: reference.to_string(),
                source: None,
            });
        }
        debug!("resolved {}", reference);
        Ok(())
    }

    /// Generate a zip archive of the tree at a reference.
    pub async fn archive(&self, reference: &str, zipfile: &Path) -> Result<()> {
        let runner = CommandRunner::new().with_working_dir(&self.path);
        let args: [&OsStr; 6] = [
            "archive".as_ref(),
            "--format".as_ref(),
            "zip".as_ref(),
            "-o".as_ref(),
            zipfile.as_os_str(),
            reference.as_ref(),
        ];
        let output = runner.run("git".as_ref(), args).await?;
        if !output.success() {
            return Err(Error::Repo {
                verb: "archive".into(),
                source: Some(
                    anyhow::anyhow!("git archive exited with {}: {}", output.exit_code, output.stderr)
                        .into(),
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ls_remote_line() {
        let tag = parse_ls_remote_line("2f6557c34f0a73fb9f2e41b7d8ed6d0c23e4e2a9 refs/tags/go1.8")
            .unwrap();
        assert_eq!(tag, "go1.8");
    }

    #[test]
    fn test_parse_ls_remote_rejects_malformed_line() {
        assert!(parse_ls_remote_line("only-one-field").is_err());
        assert!(parse_ls_remote_line("a b c").is_err());
    }

    #[test]
    fn test_parse_ls_remote_multiple_lines() {
        let text = "aaaa refs/tags/go1.7.4\nbbbb refs/tags/go1.8beta1\n";
        let tags = parse_ls_remote(text).unwrap();
        assert_eq!(tags, vec!["go1.7.4", "go1.8beta1"]);
    }

    #[test]
    fn test_mirror_path() {
        let mirror = Mirror::new(Path::new("/parent"));
        assert_eq!(mirror.path(), Path::new("/parent/go.mirror"));
    }
}
