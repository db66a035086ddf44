//! Source snapshot export.
//!
//! Archives a resolved reference from the mirror into a temporary zip,
//! extracts it into `<parent>/<ref>/`, and stamps a VERSION marker.

use crate::repo::Mirror;
use gover_core::{Error, Result};
use gover_ui::Spinner;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Removes a temporary file on drop, success or failure.
struct TempFileGuard {
    path: PathBuf,
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Export the source tree at `reference` into `<parent>/<reference>/`.
///
/// The reference is resolved first so a bogus one fails before any archive
/// work. Re-exporting into an existing snapshot directory is fine; files are
/// truncated and rewritten. The VERSION marker is written only after the
/// whole tree has been extracted, atomically, so its presence implies a
/// complete snapshot.
pub async fn export(parent: &Path, mirror: &Mirror, reference: &str) -> Result<()> {
    mirror.resolve(reference).await?;

    let spinner = Spinner::new(format!("Exporting {}...", reference));

    let zipfile = parent.join(format!("{}.zip", reference));
    if let Err(e) = mirror.archive(reference, &zipfile).await {
        spinner.finish_error(format!("Could not archive {}", reference));
        return Err(e);
    }
    let _cleanup = TempFileGuard {
        path: zipfile.clone(),
    };

    let root = parent.join(reference);
    let result = extract_zip(&zipfile, &root).and_then(|()| write_version_marker(&root, reference));

    match result {
        Ok(()) => {
            spinner.finish_success(format!("Exported {}", reference));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(format!("Could not export {}", reference));
            Err(e)
        }
    }
}

/// Extract every entry of a zip archive into `root`, preserving recorded
/// file modes. A pre-existing target directory is not an error.
pub fn extract_zip(zipfile: &Path, root: &Path) -> Result<()> {
    let file = File::open(zipfile)
        .map_err(|e| Error::io_at("could not open zip", zipfile, e))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| Error::io_at("could not read zip archive", zipfile, io::Error::other(e)))?;

    fs::create_dir_all(root).map_err(|e| Error::io_at("could not create snapshot directory", root, e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::io_at("could not read zip entry", zipfile, io::Error::other(e)))?;

        let Some(entry_path) = entry.enclosed_name() else {
            return Err(anyhow::anyhow!("invalid path in zip entry {}", entry.name()).into());
        };
        let outpath = root.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .map_err(|e| Error::io_at("could not create directory", &outpath, e))?;
            set_mode(&outpath, entry.unix_mode())?;
            continue;
        }

        if let Some(dir) = outpath.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::io_at("could not create directory", dir, e))?;
        }
        let mut out = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&outpath)
            .map_err(|e| Error::io_at("could not create file", &outpath, e))?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| Error::io_at("could not write file", &outpath, e))?;
        set_mode(&outpath, entry.unix_mode())?;
    }

    debug!("extracted {} into {}", zipfile.display(), root.display());
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| Error::io_at("could not set permissions", path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}

/// Write the VERSION marker containing the reference string.
///
/// Written to a temporary file first and renamed into place, so a VERSION
/// file is only ever observed after a complete extraction.
pub fn write_version_marker(root: &Path, reference: &str) -> Result<()> {
    let tmp = root.join("VERSION.tmp");
    let marker = root.join("VERSION");

    fs::write(&tmp, format!("{}\n", reference))
        .map_err(|e| Error::io_at("could not write VERSION file", &tmp, e))?;
    fs::rename(&tmp, &marker)
        .map_err(|e| Error::io_at("could not finalize VERSION file", &marker, e))?;
    Ok(())
}
