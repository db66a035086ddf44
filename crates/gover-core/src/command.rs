//! Command execution utilities.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::{Error, Fix};

/// Output from a captured command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// How long the command took
    pub duration: Duration,
}

impl CommandOutput {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combined stdout and stderr, for diagnostics.
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// A command runner that captures output and provides structured results.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    /// Working directory for commands
    pub working_dir: Option<std::path::PathBuf>,
    /// Environment variables to set
    pub env: Vec<(String, String)>,
}

impl CommandRunner {
    /// Create a new command runner.
    pub fn new() -> Self {
        Self {
            working_dir: None,
            env: Vec::new(),
        }
    }

    /// Set the working directory.
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    fn build(&self, program: &OsStr, args: &[std::ffi::OsString]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    fn spawn_error(program: &OsStr, e: std::io::Error) -> Error {
        let program_str = program.to_string_lossy().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ToolMissing {
                tool: program_str.clone(),
                source: Some(Box::new(e)),
                fixes: vec![Fix::new(format!(
                    "Install {} and make sure it is on your PATH",
                    program_str
                ))],
            }
        } else {
            Error::Io {
                message: format!("failed to execute {}", program_str),
                path: None,
                source: e,
            }
        }
    }

    /// Run a command and capture output.
    #[instrument(skip(self, args), fields(program = %program.as_ref().to_string_lossy()))]
    pub async fn run<S, I>(&self, program: S, args: I) -> Result<CommandOutput, Error>
    where
        S: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
    {
        let program_ref = program.as_ref();
        let args_vec: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();

        debug!(
            "Running command: {} {:?}",
            program_ref.to_string_lossy(),
            args_vec
        );

        let mut cmd = self.build(program_ref, &args_vec);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let start = Instant::now();
        let output = cmd
            .output()
            .await
            .map_err(|e| Self::spawn_error(program_ref, e))?;
        let duration = start.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        debug!(
            exit_code = exit_code,
            duration_ms = duration.as_millis(),
            "Command completed"
        );

        Ok(CommandOutput {
            exit_code,
            stdout,
            stderr,
            duration,
        })
    }

    /// Run a command and return an error if it fails.
    pub async fn run_checked<S, I>(&self, program: S, args: I) -> Result<CommandOutput, Error>
    where
        S: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
    {
        let program_str = program.as_ref().to_string_lossy().to_string();
        let output = self.run(program, args).await?;

        if !output.success() {
            return Err(Error::CommandFailed {
                command: program_str,
                exit_code: Some(output.exit_code),
                stdout: output.stdout,
                stderr: output.stderr,
                fixes: vec![],
            });
        }

        Ok(output)
    }

    /// Run a command with stdio inherited from the parent process.
    ///
    /// Used for git clone/fetch (credential prompts must reach the terminal)
    /// and for delegating to an installed `go` binary. Returns the exit code.
    #[instrument(skip(self, args), fields(program = %program.as_ref().to_string_lossy()))]
    pub async fn run_interactive<S, I>(&self, program: S, args: I) -> Result<i32, Error>
    where
        S: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
    {
        let program_ref = program.as_ref();
        let args_vec: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();

        debug!(
            "Running interactive command: {} {:?}",
            program_ref.to_string_lossy(),
            args_vec
        );

        let mut cmd = self.build(program_ref, &args_vec);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd
            .status()
            .await
            .map_err(|e| Self::spawn_error(program_ref, e))?;

        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_output() {
        let out = CommandOutput {
            exit_code: 1,
            stdout: "building".into(),
            stderr: "boom".into(),
            duration: Duration::from_millis(5),
        };
        assert_eq!(out.combined(), "building\nboom");
        assert!(!out.success());
    }

    #[tokio::test]
    async fn test_missing_tool_is_structured() {
        let runner = CommandRunner::new();
        let err = runner
            .run("definitely-not-a-real-tool-gover", ["--version"])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolMissing { .. }));
    }
}
