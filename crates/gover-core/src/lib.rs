//! Core types for gover.
//!
//! This crate provides shared error handling, command execution, and
//! environment configuration used across all gover crates.

pub mod command;
pub mod env;
pub mod error;

pub use command::{CommandOutput, CommandRunner};
pub use env::EnvVars;
pub use error::{Error, ErrorCode, Fix, Result};

/// Exit codes for the gover CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    GeneralError = 1,
    /// Usage error (bad arguments)
    UsageError = 2,
    /// Toolchain error (missing compiler, unresolved ref, repo failure)
    ToolchainError = 4,
    /// Build failure
    BuildError = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Map an error category to a process exit code.
    ///
    /// This is the single place where failures become exit statuses; library
    /// code never terminates the process itself.
    pub fn for_error(code: ErrorCode) -> Self {
        match code {
            ErrorCode::ToolMissing
            | ErrorCode::CompilerMissing
            | ErrorCode::NotInstalled
            | ErrorCode::UnresolvedRef
            | ErrorCode::RepoError
            | ErrorCode::UnsupportedHost => ExitCode::ToolchainError,
            ErrorCode::BuildFailure => ExitCode::BuildError,
            ErrorCode::IoError
            | ErrorCode::CommandFailed
            | ErrorCode::DownloadError
            | ErrorCode::LockError => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            ExitCode::for_error(ErrorCode::UnresolvedRef),
            ExitCode::ToolchainError
        );
        assert_eq!(
            ExitCode::for_error(ErrorCode::BuildFailure),
            ExitCode::BuildError
        );
        assert_eq!(i32::from(ExitCode::UsageError), 2);
    }
}
