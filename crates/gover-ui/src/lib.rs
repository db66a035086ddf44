//! Terminal UI helpers for gover.
//!
//! Consistent output formatting, spinners, progress bars, and error display
//! for the gover CLI.

pub mod output;
pub mod spinner;
pub mod style;

pub use output::{Output, Verbosity};
pub use spinner::{Progress, Spinner};
pub use style::Style;
