//! Advisory install lock.
//!
//! Serializes mirror updates and builds across concurrent gover processes.
//! The lock file lives next to the mirror and is never removed; only the
//! advisory flock on it matters.

use fs2::FileExt;
use gover_core::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCK_FILE: &str = "gover.lock";

/// An exclusive advisory lock held for the duration of an install.
///
/// Released on drop.
pub struct InstallLock {
    file: File,
    path: PathBuf,
}

impl InstallLock {
    /// Acquire the lock under `parent`, blocking until it is free.
    pub fn acquire(parent: &Path) -> Result<Self> {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io_at("could not create directory", parent, e))?;

        let path = parent.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&path)
            .map_err(|e| Error::Lock {
                message: format!("could not open lock file {}", path.display()),
                source: Some(Box::new(e)),
            })?;

        file.lock_exclusive().map_err(|e| Error::Lock {
            message: format!("could not lock {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        debug!("acquired install lock at {}", path.display());
        Ok(Self { file, path })
    }
}

impl Drop for InstallLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        debug!("released install lock at {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_and_reacquire() {
        let temp = TempDir::new().unwrap();

        let lock = InstallLock::acquire(temp.path()).unwrap();
        drop(lock);

        // Dropping releases the flock so a second acquire succeeds.
        let lock = InstallLock::acquire(temp.path()).unwrap();
        drop(lock);
    }

    #[test]
    fn test_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("src/golang.org/x");

        let _lock = InstallLock::acquire(&parent).unwrap();
        assert!(parent.join(LOCK_FILE).exists());
    }
}
