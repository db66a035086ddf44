//! Environment variable constants for gover.
//!
//! Single source of truth for every environment variable gover reads or sets.

/// Environment variable names used by gover.
pub struct EnvVars;

impl EnvVars {
    // Output settings

    /// Enable verbose output.
    pub const GOVER_VERBOSE: &'static str = "GOVER_VERBOSE";

    /// Suppress output.
    pub const GOVER_QUIET: &'static str = "GOVER_QUIET";

    /// Disable colored output.
    pub const GOVER_NO_COLOR: &'static str = "GOVER_NO_COLOR";

    /// Enable JSON log output.
    pub const GOVER_LOG_JSON: &'static str = "GOVER_LOG_JSON";

    // Build settings (consumed by the Go build scripts and by gover itself)

    /// When set to "0", the C compiler check is skipped.
    pub const CGO_ENABLED: &'static str = "CGO_ENABLED";

    /// Explicitly configured C compiler name.
    pub const CC: &'static str = "CC";

    /// Points the Go build at its bootstrap toolchain root.
    pub const GOROOT_BOOTSTRAP: &'static str = "GOROOT_BOOTSTRAP";

    // Standard environment variables

    /// Standard NO_COLOR environment variable.
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// Standard CLICOLOR environment variable.
    pub const CLICOLOR: &'static str = "CLICOLOR";
}

/// Check if the CGO C compiler requirement is disabled.
pub fn cgo_disabled() -> bool {
    std::env::var(EnvVars::CGO_ENABLED).as_deref() == Ok("0")
}

/// Get the explicitly configured C compiler, if any.
pub fn configured_cc() -> Option<String> {
    std::env::var(EnvVars::CC).ok().filter(|s| !s.is_empty())
}

/// Check if colors should be disabled based on environment.
pub fn no_color() -> bool {
    std::env::var(EnvVars::NO_COLOR).is_ok()
        || std::env::var(EnvVars::GOVER_NO_COLOR).is_ok()
        || std::env::var(EnvVars::CLICOLOR)
            .map(|v| v == "0")
            .unwrap_or(false)
}
