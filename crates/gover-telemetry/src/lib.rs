//! Logging setup for gover.
//!
//! Structured logging via tracing, with optional JSON output for debugging.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Initialize the tracing subscriber.
///
/// Respects the RUST_LOG environment variable; the verbose flag raises the
/// default level for gover's own crates.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gover=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gover=warn"))
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    // Use JSON format if GOVER_LOG_JSON is set
    if std::env::var("GOVER_LOG_JSON").is_ok() {
        let json_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        subscriber.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .without_time();

        subscriber.with(fmt_layer).init();
    }
}
