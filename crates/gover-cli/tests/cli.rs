//! Integration tests for the gover CLI.
//!
//! Only offline behavior is exercised here; anything touching the network
//! or a Go checkout belongs in manual testing.

#![allow(deprecated)] // cargo_bin is deprecated but the replacement requires macros

use assert_cmd::Command;
use predicates::prelude::*;

fn gover() -> Command {
    Command::cargo_bin("gover").unwrap()
}

#[test]
fn test_help() {
    gover()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "install and use multiple Go versions",
        ))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("install"));
}

#[test]
fn test_help_hides_testing_commands() {
    gover()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update").not())
        .stdout(predicate::str::contains("export").not());
}

#[test]
fn test_version() {
    gover()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gover"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_no_args_is_usage_error() {
    gover().assert().failure().code(2);
}

#[test]
fn test_install_rejects_bad_version() {
    gover()
        .args(["install", "2.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not look like a Go version"));
}

#[test]
fn test_run_rejects_bad_version() {
    gover()
        .args(["2.0", "version"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not look like a Go version"));
}

#[test]
fn test_completions_bash() {
    gover()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gover"));
}

/// Install against stubbed `go` and `git` binaries in an isolated GOPATH.
///
/// The git stub creates the mirror directory on clone and copies a canned
/// source zip on archive; the zip's make.bash records each build it runs,
/// so the bootstrap-before-target ordering is observable from the log.
#[cfg(unix)]
mod install_offline {
    use super::gover;
    use std::fs;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_script(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn create_source_zip(path: &Path) {
        let file = fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);

        zip.add_directory("src/", SimpleFileOptions::default())
            .unwrap();

        let options = SimpleFileOptions::default().unix_permissions(0o755);
        zip.start_file("src/make.bash", options).unwrap();
        zip.write_all(
            br#"#!/bin/sh
dir="$(cd "$(dirname "$0")" && pwd)"
ref="$(basename "$(dirname "$dir")")"
echo "build $ref bootstrap=${GOROOT_BOOTSTRAP:-none}" >> "$BUILD_LOG"
mkdir -p "$dir/../bin"
printf fake > "$dir/../bin/go"
chmod +x "$dir/../bin/go"
"#,
        )
        .unwrap();

        zip.finish().unwrap();
    }

    #[test]
    fn test_install_builds_bootstrap_before_target() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();

        let gopath = temp.path().join("gopath");
        let build_log = temp.path().join("build.log");
        let zipfile = temp.path().join("source.zip");
        create_source_zip(&zipfile);

        // `go env GOPATH` is the only invocation the stub has to answer.
        write_script(
            &bin.join("go"),
            &format!("#!/bin/sh\necho \"{}\"\n", gopath.display()),
        );
        write_script(
            &bin.join("git"),
            &format!(
                r#"#!/bin/sh
case "$1" in
  clone) mkdir -p "$4" ;;
  archive) cp "{}" "$5" ;;
esac
exit 0
"#,
                zipfile.display()
            ),
        );

        let path = format!(
            "{}:{}",
            bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        gover()
            .args(["install", "1.8"])
            .env("PATH", &path)
            .env("CGO_ENABLED", "0")
            .env("BUILD_LOG", &build_log)
            .assert()
            .success();

        let parent = gopath.join("src/golang.org/x");

        // The bootstrap toolchain is built first, without GOROOT_BOOTSTRAP;
        // the requested version builds second, pointed at the bootstrap.
        let log = fs::read_to_string(&build_log).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected build log: {:?}", log);
        assert_eq!(lines[0], "build release-branch.go1.4 bootstrap=none");
        assert_eq!(
            lines[1],
            format!(
                "build go1.8 bootstrap={}",
                parent.join("release-branch.go1.4").display()
            )
        );

        assert!(parent.join("release-branch.go1.4/bin/go").exists());
        assert!(parent.join("go1.8/bin/go").exists());
        assert_eq!(
            fs::read_to_string(parent.join("go1.8/VERSION")).unwrap(),
            "go1.8\n"
        );
    }

    #[test]
    fn test_install_skips_bootstrap_when_present() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();

        let gopath = temp.path().join("gopath");
        let build_log = temp.path().join("build.log");
        let zipfile = temp.path().join("source.zip");
        create_source_zip(&zipfile);

        write_script(
            &bin.join("go"),
            &format!("#!/bin/sh\necho \"{}\"\n", gopath.display()),
        );
        write_script(
            &bin.join("git"),
            &format!(
                r#"#!/bin/sh
case "$1" in
  clone) mkdir -p "$4" ;;
  archive) cp "{}" "$5" ;;
esac
exit 0
"#,
                zipfile.display()
            ),
        );

        // Pre-existing bootstrap binary: only the target gets built.
        let parent = gopath.join("src/golang.org/x");
        let boot_bin = parent.join("release-branch.go1.4/bin");
        fs::create_dir_all(&boot_bin).unwrap();
        fs::write(boot_bin.join("go"), b"fake").unwrap();

        let path = format!(
            "{}:{}",
            bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        gover()
            .args(["install", "1.8"])
            .env("PATH", &path)
            .env("CGO_ENABLED", "0")
            .env("BUILD_LOG", &build_log)
            .assert()
            .success();

        let log = fs::read_to_string(&build_log).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 1, "unexpected build log: {:?}", log);
        assert!(lines[0].starts_with("build go1.8"));
    }
}
