//! Prebuilt binary index: listing and downloading official Go releases.
//!
//! The builder index is a flat list of artifact URLs, one per line. Which
//! versions are usable on this host is decided by filename heuristics; the
//! rules live in [`parse_index_line`] so they stay testable against pinned
//! real index lines.

use crate::version::Reference;
use futures_util::StreamExt;
use gover_core::{Error, Result};
use gover_ui::Progress;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Index of every published artifact, maintained by the Go builders.
pub const DL_INDEX_URL: &str = "https://storage.googleapis.com/go-builder-data/dl-index.txt";

/// Base URL the artifact filenames hang off.
pub const DL_BASE_URL: &str = "https://storage.googleapis.com/golang/";

/// The host OS in Go's naming scheme.
pub fn host_os() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// The host architecture in Go's naming scheme.
pub fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    }
}

/// Extract the version from one index line, if the artifact is a usable
/// binary archive for the given OS and architecture.
///
/// A line looks like
/// `https://storage.googleapis.com/golang/go1.2.2.darwin-386-osx10.6.tar.gz`.
/// Installer packages, checksums, source tarballs, and mismatched platforms
/// yield `None`.
pub fn parse_index_line(line: &str, os: &str, arch: &str) -> Option<String> {
    if line.ends_with(".pkg")
        || line.ends_with(".msi")
        || line.ends_with(".sha256")
        || line.ends_with(".src.tar.gz")
        || !line.contains(os)
    {
        return None;
    }

    // Strip down to the filename: go1.2.2.darwin-386-osx10.6.tar.gz
    let (_, name) = line.rsplit_once('/')?;

    // Eliminate the archive suffix: go1.2.2.darwin-386-osx10.6
    let name = name
        .strip_suffix(".tar.gz")
        .or_else(|| name.strip_suffix(".zip"))
        .unwrap_or(name);

    // The pattern is version.platform, but the platform part can itself
    // contain periods, so split on the OS name instead.
    let i = name.find(os)?;
    if i == 0 {
        return None;
    }
    let vers = &name[..i - 1];
    let plat = &name[i..];

    // Two components are OS and arch; three add a sub-arch qualifier, which
    // only darwin's long-dead osx10.6 builds use.
    let platx: Vec<&str> = plat.split('-').collect();
    let arch_part = match platx.len() {
        2 => platx[1],
        3 => {
            if platx[2] == "osx10.6" {
                return None;
            }
            platx[1]
        }
        _ => return None,
    };

    // go1.6beta1 published linux-arm and linux-arm6; every other release
    // uses armv6l. Skip plain arm, fold the others onto GOARCH naming.
    let arch_part = match arch_part {
        "arm" => return None,
        "arm6" | "armv6l" => "arm",
        other => other,
    };

    if arch_part != arch {
        return None;
    }

    Some(vers.to_string())
}

async fn fetch_index() -> Result<String> {
    let client = reqwest::Client::new();
    let resp = client
        .get(DL_INDEX_URL)
        .send()
        .await
        .map_err(|e| Error::download_with("could not fetch download index", e))?
        .error_for_status()
        .map_err(|e| Error::download_with("could not fetch download index", e))?;
    resp.text()
        .await
        .map_err(|e| Error::download_with("could not read download index", e))
}

/// List versions with a prebuilt binary for this host.
pub async fn list_downloadable() -> Result<Vec<String>> {
    let index = fetch_index().await?;
    let os = host_os();
    let arch = host_arch();
    Ok(index
        .lines()
        .filter_map(|line| parse_index_line(line, os, arch))
        .collect())
}

/// The artifact filename extension published for an OS.
fn artifact_ext(os: &str) -> Result<&'static str> {
    match os {
        "darwin" => Ok("-osx10.6.pkg"),
        "linux" => Ok(".tar.gz"),
        "windows" => Ok(".zip"),
        other => Err(Error::UnsupportedHost { os: other.into() }),
    }
}

/// Build the artifact filename for this host and confirm the index lists it.
pub fn select_binary(index: &str, reference: &Reference) -> Result<String> {
    let os = host_os();
    let ext = artifact_ext(os)?;
    let file = format!("{}.{}-{}{}", reference, os, host_arch(), ext);
    let url = format!("{}{}", DL_BASE_URL, file);
    if !index.contains(&url) {
        return Err(Error::Download {
            message: format!("binary ({}) not available", url),
            source: None,
        });
    }
    Ok(file)
}

/// Download the prebuilt artifact for a reference into the system temp
/// directory and return its path.
pub async fn download(reference: &Reference) -> Result<PathBuf> {
    let index = fetch_index().await?;
    let file = select_binary(&index, reference)?;
    let url = format!("{}{}", DL_BASE_URL, file);

    info!("downloading {}", url);

    let client = reqwest::Client::new();
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::download_with(format!("could not download {}", url), e))?
        .error_for_status()
        .map_err(|e| Error::download_with(format!("could not download {}", url), e))?;

    let total = resp.content_length().unwrap_or(0);
    let progress = Progress::new(total, format!("Downloading {}", file));

    let dest = std::env::temp_dir().join(&file);
    let tmp = dest.with_extension("tmp");
    let mut out = std::fs::File::create(&tmp)
        .map_err(|e| Error::io_at("could not create download file", &tmp, e))?;

    let mut downloaded: u64 = 0;
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk =
            chunk.map_err(|e| Error::download_with(format!("could not download {}", url), e))?;
        out.write_all(&chunk)
            .map_err(|e| Error::io_at("could not write download file", &tmp, e))?;
        downloaded += chunk.len() as u64;
        progress.set_position(downloaded);
    }
    out.flush()
        .map_err(|e| Error::io_at("could not write download file", &tmp, e))?;
    drop(out);

    std::fs::rename(&tmp, &dest)
        .map_err(|e| Error::io_at("could not finalize download file", &dest, e))?;

    progress.finish(format!("Downloaded {}", dest.display()));
    debug!("saved {}", dest.display());
    Ok(dest)
}
