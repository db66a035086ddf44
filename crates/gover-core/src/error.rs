//! Error types for gover.

use std::path::PathBuf;

/// Result type alias using gover Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error codes for categorizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required external tool (git, go) is not on PATH
    ToolMissing,
    /// No usable C compiler found for the build
    CompilerMissing,
    /// Requested version is not installed
    NotInstalled,
    /// Reference does not resolve in the mirror
    UnresolvedRef,
    /// Mirror clone or fetch failed
    RepoError,
    /// Host OS has no known build script or download format
    UnsupportedHost,
    /// I/O error
    IoError,
    /// Command execution failed
    CommandFailed,
    /// Build script failed or artifact missing afterwards
    BuildFailure,
    /// Index fetch or artifact download failed
    DownloadError,
    /// Install lock error
    LockError,
}

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Description of what this fix does
    pub description: String,
    /// Command to run, if applicable
    pub command: Option<String>,
}

impl Fix {
    /// Create a fix with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    /// Create a fix with a command.
    pub fn with_command(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

/// Structured error type for gover.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tool not found: {tool}")]
    ToolMissing {
        tool: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        fixes: Vec<Fix>,
    },

    #[error("could not find a C compiler, tried {}", tried.join(", "))]
    CompilerMissing { tried: Vec<String>, fixes: Vec<Fix> },

    #[error("go {reference} is not installed ({path} not found)")]
    NotInstalled {
        reference: String,
        path: PathBuf,
        fixes: Vec<Fix>,
    },

    #[error("could not resolve {reference:?} in the Go repo mirror")]
    UnresolvedRef {
        reference: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("could not {verb} Go repo")]
    Repo {
        verb: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("unrecognized host OS: {os}")]
    UnsupportedHost { os: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("command failed: {command}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        fixes: Vec<Fix>,
    },

    #[error("could not build {reference}")]
    BuildFailed {
        reference: String,
        output: String,
        fixes: Vec<Fix>,
    },

    #[error("download error: {message}")]
    Download {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("lock error: {message}")]
    Lock {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ToolMissing { .. } => ErrorCode::ToolMissing,
            Error::CompilerMissing { .. } => ErrorCode::CompilerMissing,
            Error::NotInstalled { .. } => ErrorCode::NotInstalled,
            Error::UnresolvedRef { .. } => ErrorCode::UnresolvedRef,
            Error::Repo { .. } => ErrorCode::RepoError,
            Error::UnsupportedHost { .. } => ErrorCode::UnsupportedHost,
            Error::Io { .. } => ErrorCode::IoError,
            Error::CommandFailed { .. } => ErrorCode::CommandFailed,
            Error::BuildFailed { .. } => ErrorCode::BuildFailure,
            Error::Download { .. } => ErrorCode::DownloadError,
            Error::Lock { .. } => ErrorCode::LockError,
            Error::Other(_) => ErrorCode::IoError,
        }
    }

    /// Get suggested fixes for this error.
    pub fn fixes(&self) -> &[Fix] {
        match self {
            Error::ToolMissing { fixes, .. } => fixes,
            Error::CompilerMissing { fixes, .. } => fixes,
            Error::NotInstalled { fixes, .. } => fixes,
            Error::CommandFailed { fixes, .. } => fixes,
            Error::BuildFailed { fixes, .. } => fixes,
            _ => &[],
        }
    }

    /// Create a download error from a message.
    pub fn download(message: impl Into<String>) -> Self {
        Error::Download {
            message: message.into(),
            source: None,
        }
    }

    /// Create a download error wrapping an underlying cause.
    pub fn download_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Download {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with a path for context.
    pub fn io_at(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_missing_message_lists_candidates() {
        let err = Error::CompilerMissing {
            tried: vec!["gcc".into(), "clang".into()],
            fixes: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("gcc"));
        assert!(msg.contains("clang"));
    }

    #[test]
    fn test_error_codes() {
        let err = Error::UnresolvedRef {
            reference: "go9.9".into(),
            source: None,
        };
        assert_eq!(err.code(), ErrorCode::UnresolvedRef);

        let err = Error::download("index unavailable");
        assert_eq!(err.code(), ErrorCode::DownloadError);
    }

    #[test]
    fn test_fixes_attached() {
        let err = Error::NotInstalled {
            reference: "go1.8".into(),
            path: "/tmp/go1.8/bin/go".into(),
            fixes: vec![Fix::with_command("Install go1.8", "gover install 1.8")],
        };
        assert_eq!(err.fixes().len(), 1);
        assert!(err.fixes()[0].command.is_some());
    }
}
